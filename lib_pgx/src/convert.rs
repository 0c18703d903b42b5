use log::{debug, error, info};
use thiserror::Error;

use crate::archive::{summarize, ArchiveReader, ArchiveSummary, ReadError};
use crate::constants::FamilySpec;
use crate::sprite::{palette, Canvas, Compositor, DrawError, LayoutError, LayoutParams};

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Malformed archive: {0}")]
    Read(#[from] ReadError),
    #[error("Archive holds {found} sprites, but a {family} archive holds {expected}")]
    UnexpectedSpriteTotal {
        family: &'static str,
        expected: u32,
        found: u32,
    },
    #[error("Invalid layout: {0}")]
    Layout(#[from] LayoutError),
    #[error("Layout does not match the archive: {0}")]
    OutOfBounds(#[from] DrawError),
}

/// Result of a successful conversion. The canvas is final at this point.
#[derive(Debug)]
pub struct Conversion {
    pub canvas: Canvas,
    pub sprites_written: u32,
    pub tilesets: u32,
}

/// Counts every sprite in `data` and checks the total against `family`.
pub fn precheck(data: &[u8], family: &FamilySpec) -> Result<ArchiveSummary, ConvertError> {
    let summary = summarize(data)?;
    info!("Found a total of {} sprites", summary.total_sprites);

    if summary.total_sprites != family.total_sprites() {
        error!(
            "Sprite total {} does not match the {} archive total of {}",
            summary.total_sprites,
            family.name,
            family.total_sprites()
        );
        return Err(ConvertError::UnexpectedSpriteTotal {
            family: family.name,
            expected: family.total_sprites(),
            found: summary.total_sprites,
        });
    }

    Ok(summary)
}

/// Decodes a whole archive onto a fresh canvas laid out by `layout`.
///
/// Nothing is returned unless every record decoded and every pixel landed
/// inside the canvas.
pub fn convert(
    data: &[u8],
    family: &FamilySpec,
    layout: &LayoutParams,
) -> Result<Conversion, ConvertError> {
    info!("Starting conversion of {} bytes", data.len());
    layout.validate()?;
    palette::report_discrepancies();

    if layout.precheck {
        precheck(data, family)?;
    }

    let (width, height) = layout.canvas_size(family).map_err(|e| {
        error!("Layout {:?} cannot be drawn: {}", layout, e);
        e
    })?;
    debug!("Canvas: {}x{} pixels, layout {:?}", width, height, layout);
    let mut canvas = Canvas::new(width, height);

    let mut compositor = Compositor::new(&mut canvas, *layout);
    let mut tilesets = 0;
    for record in ArchiveReader::new(data) {
        compositor.draw_record(&record?)?;
        tilesets += 1;
    }
    let sprites_written = compositor.sprites_drawn();

    info!(
        "Conversion completed: {} sprites from {} tilesets",
        sprites_written, tilesets
    );

    Ok(Conversion {
        canvas,
        sprites_written,
        tilesets,
    })
}
