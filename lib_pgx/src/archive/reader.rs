use std::io::{self, ErrorKind, Read};

use log::{debug, error};
use thiserror::Error;

use super::format::{TilesetHeader, TilesetRecord};
use crate::constants::HEADER_SIZE;

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("Truncated tileset header at offset {offset}: only {available} of 3 bytes left")]
    TruncatedHeader { offset: u64, available: usize },
    #[error(
        "Truncated sprite #{sprite_index} at offset {offset}: expected {expected} bytes, got {available}"
    )]
    TruncatedSprite {
        offset: u64,
        sprite_index: u32,
        expected: u32,
        available: u32,
    },
    #[error("I/O error while reading archive: {0}")]
    Io(#[from] io::Error),
}

/// Forward-only reader over the tileset records of an archive.
///
/// Iterating yields whole records. The iterator stops for good after the
/// first error.
pub struct ArchiveReader<R> {
    inner: R,
    offset: u64,
    sprite_index: u32,
    failed: bool,
}

impl<R: Read> ArchiveReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            offset: 0,
            sprite_index: 0,
            failed: false,
        }
    }

    /// Bytes consumed so far.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Sprites consumed so far, across all records.
    pub fn sprites_read(&self) -> u32 {
        self.sprite_index
    }

    /// Reads the next 3-byte header.
    ///
    /// Returns `None` only when the stream is exhausted exactly at a record
    /// boundary.
    pub fn next_record(&mut self) -> Result<Option<TilesetHeader>, ReadError> {
        let mut bytes = [0u8; HEADER_SIZE];
        let available = fill(&mut self.inner, &mut bytes)?;

        match available {
            0 => {
                debug!("End of archive at offset {}", self.offset);
                Ok(None)
            }
            HEADER_SIZE => {
                let header = TilesetHeader::from_bytes(bytes);
                debug!(
                    "Tileset header at offset {}: count={} width_bytes={} height={}",
                    self.offset,
                    header.sprite_count,
                    header.plane_width_bytes,
                    header.plane_height_pixels
                );
                self.offset += HEADER_SIZE as u64;
                Ok(Some(header))
            }
            _ => {
                error!(
                    "Archive ends inside a tileset header at offset {} ({} bytes left)",
                    self.offset, available
                );
                Err(ReadError::TruncatedHeader {
                    offset: self.offset,
                    available,
                })
            }
        }
    }

    /// Reads the bodies of all sprites announced by `header`.
    pub fn read_sprites(&mut self, header: &TilesetHeader) -> Result<Vec<u8>, ReadError> {
        let size = header.sprite_bytes();
        let mut data = Vec::new();

        for _ in 0..header.sprite_count {
            let start = data.len();
            data.resize(start + size as usize, 0);
            let available = fill(&mut self.inner, &mut data[start..])?;
            self.consume_sprite(size, available as u64)?;
        }

        Ok(data)
    }

    /// Same accounting as [`read_sprites`](Self::read_sprites), without keeping
    /// the bytes.
    pub fn skip_sprites(&mut self, header: &TilesetHeader) -> Result<(), ReadError> {
        let size = header.sprite_bytes();

        for _ in 0..header.sprite_count {
            let available = io::copy(&mut (&mut self.inner).take(size as u64), &mut io::sink())?;
            self.consume_sprite(size, available)?;
        }

        Ok(())
    }

    /// Looks up a sprite by its archive-wide ordinal.
    pub fn find_sprite(
        mut self,
        sprite_id: u32,
    ) -> Result<Option<(TilesetHeader, Vec<u8>)>, ReadError> {
        while let Some(header) = self.next_record()? {
            let first = self.sprite_index;
            if sprite_id >= first && sprite_id < first + header.sprite_count as u32 {
                let data = self.read_sprites(&header)?;
                let size = header.sprite_bytes() as usize;
                let start = (sprite_id - first) as usize * size;
                return Ok(Some((header, data[start..start + size].to_vec())));
            }
            self.skip_sprites(&header)?;
        }
        Ok(None)
    }

    fn consume_sprite(&mut self, expected: u32, available: u64) -> Result<(), ReadError> {
        let offset = self.offset;
        self.offset += available;

        if available < expected as u64 {
            error!(
                "Archive ends inside sprite #{} at offset {}: expected {} bytes, got {}",
                self.sprite_index, offset, expected, available
            );
            return Err(ReadError::TruncatedSprite {
                offset,
                sprite_index: self.sprite_index,
                expected,
                available: available as u32,
            });
        }

        self.sprite_index += 1;
        Ok(())
    }

    fn read_record(&mut self) -> Result<Option<TilesetRecord>, ReadError> {
        let offset = self.offset;
        let first_sprite = self.sprite_index;

        let Some(header) = self.next_record()? else {
            return Ok(None);
        };
        let data = self.read_sprites(&header)?;

        Ok(Some(TilesetRecord {
            header,
            offset,
            first_sprite,
            data,
        }))
    }
}

impl<R: Read> Iterator for ArchiveReader<R> {
    type Item = Result<TilesetRecord, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        match self.read_record() {
            Ok(record) => record.map(Ok),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

/// Header-level view of a whole archive, gathered without decoding pixels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchiveSummary {
    pub headers: Vec<TilesetHeader>,
    pub total_sprites: u32,
    pub total_bytes: u64,
}

impl ArchiveSummary {
    pub fn tilesets(&self) -> usize {
        self.headers.len()
    }
}

/// Walks every record once, counting sprites and skipping their bodies.
pub fn summarize<R: Read>(inner: R) -> Result<ArchiveSummary, ReadError> {
    let mut reader = ArchiveReader::new(inner);
    let mut headers = Vec::new();

    while let Some(header) = reader.next_record()? {
        reader.skip_sprites(&header)?;
        headers.push(header);
    }

    debug!(
        "Archive summary: {} tilesets, {} sprites, {} bytes",
        headers.len(),
        reader.sprites_read(),
        reader.offset()
    );

    Ok(ArchiveSummary {
        headers,
        total_sprites: reader.sprites_read(),
        total_bytes: reader.offset(),
    })
}

/// Reads until `buf` is full or the stream ends, returning the bytes read.
fn fill<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
