use std::path::Path;

use lib_pgx::archive::summarize;
use lib_pgx::constants::{FILE_EXT, FORMAT_NAME};
use lib_pgx::{convert, ArchiveReader, FamilySpec, LayoutParams};
use log::{info, warn};

use crate::filemanager::{read_archive, ExtractError};
use crate::image_sink::ImageSink;
use crate::preview::emoji_rows;

/// An archive loaded in memory, ready for any of the extractor's modes.
pub struct Extractor {
    data: Vec<u8>,
    family: FamilySpec,
}

impl Extractor {
    pub fn open(path: &Path, family: FamilySpec) -> Result<Self, ExtractError> {
        if !path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(FILE_EXT))
        {
            warn!(
                "{} lacks the .{} extension of a {} archive",
                path.display(),
                FILE_EXT,
                FORMAT_NAME
            );
        }
        Ok(Self::from_bytes(read_archive(path)?, family))
    }

    pub fn from_bytes(data: Vec<u8>, family: FamilySpec) -> Self {
        Self { data, family }
    }

    /// One `count,width,height` line per tileset, then the sprite total.
    pub fn list(&self) -> Result<String, ExtractError> {
        let summary = summarize(&self.data[..])?;

        let mut out: String = summary
            .headers
            .iter()
            .map(|header| {
                format!(
                    "{},{},{}\n",
                    header.sprite_count, header.plane_width_bytes, header.plane_height_pixels
                )
            })
            .collect();
        out.push_str(&format!(
            "Found a total of {} sprites in {} tilesets.\n",
            summary.total_sprites,
            summary.tilesets()
        ));
        Ok(out)
    }

    pub fn emoji(&self, sprite_id: u32) -> Result<String, ExtractError> {
        match ArchiveReader::new(&self.data[..]).find_sprite(sprite_id)? {
            Some((header, sprite)) => Ok(emoji_rows(&header, &sprite)),
            None => Err(ExtractError::SpriteNotFound {
                id: sprite_id,
                total: summarize(&self.data[..])?.total_sprites,
            }),
        }
    }

    /// Decodes the whole archive and hands the canvas to `sink`. Nothing
    /// reaches the sink if decoding fails.
    pub fn extract(
        &self,
        layout: &LayoutParams,
        sink: &dyn ImageSink,
    ) -> Result<u32, ExtractError> {
        let conversion = convert(&self.data, &self.family, layout)?;
        let written = conversion.sprites_written;

        info!("Writing sprite sheet to {}", sink.describe());
        sink.write(conversion.canvas)?;
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use lib_pgx::{Canvas, LayoutPreset};

    use super::*;

    const FAMILY: FamilySpec = FamilySpec {
        name: "test",
        tilesets: 1,
        sprites_per_tileset: 2,
    };

    #[derive(Default)]
    struct MemorySink {
        written: RefCell<Option<Canvas>>,
    }

    impl ImageSink for MemorySink {
        fn write(&self, canvas: Canvas) -> Result<(), ExtractError> {
            *self.written.borrow_mut() = Some(canvas);
            Ok(())
        }

        fn describe(&self) -> String {
            "memory".to_string()
        }
    }

    fn archive() -> Vec<u8> {
        let mut data = vec![2, 1, 1];
        data.extend_from_slice(&[0xFF, 0xFF, 0, 0, 0]);
        data.extend_from_slice(&[0xFF, 0, 0, 0xFF, 0]);
        data
    }

    #[test]
    fn test_extract_writes_canvas() {
        let extractor = Extractor::from_bytes(archive(), FAMILY);
        let sink = MemorySink::default();

        let written = extractor
            .extract(&LayoutPreset::FourColumn.params(&FAMILY), &sink)
            .unwrap();
        assert_eq!(written, 2);

        let canvas = sink.written.borrow_mut().take().unwrap();
        assert_eq!(canvas.dimensions(), (64, 16));
        assert_eq!(canvas.get_pixel(16, 0), Ok([170, 0, 0, 255]));
    }

    #[test]
    fn test_failed_extract_leaves_sink_untouched() {
        let mut data = archive();
        data.pop();
        let extractor = Extractor::from_bytes(data, FAMILY);
        let sink = MemorySink::default();

        assert!(extractor
            .extract(&LayoutPreset::FourColumn.params(&FAMILY), &sink)
            .is_err());
        assert!(sink.written.borrow().is_none());
    }

    #[test]
    fn test_list() {
        let extractor = Extractor::from_bytes(archive(), FAMILY);
        assert_eq!(
            extractor.list().unwrap(),
            "2,1,1\nFound a total of 2 sprites in 1 tilesets.\n"
        );
    }

    #[test]
    fn test_list_every_record() {
        let mut data = archive();
        data.extend_from_slice(&[0, 2, 16]);
        let extractor = Extractor::from_bytes(data, FAMILY);
        assert_eq!(
            extractor.list().unwrap(),
            "2,1,1\n0,2,16\nFound a total of 2 sprites in 2 tilesets.\n"
        );
    }

    #[test]
    fn test_emoji_missing_sprite() {
        let extractor = Extractor::from_bytes(archive(), FAMILY);
        assert!(matches!(
            extractor.emoji(2),
            Err(ExtractError::SpriteNotFound { id: 2, total: 2 })
        ));
        assert_eq!(extractor.emoji(1).unwrap(), "🔴🔴🔴🔴🔴🔴🔴🔴\n");
    }
}
