use crate::constants::{HEADER_SIZE, PLANE_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilesetHeader {
    pub sprite_count: u8,
    pub plane_width_bytes: u8,
    pub plane_height_pixels: u8,
}

impl TilesetHeader {
    pub fn from_bytes(bytes: [u8; HEADER_SIZE]) -> Self {
        Self {
            sprite_count: bytes[0],
            plane_width_bytes: bytes[1],
            plane_height_pixels: bytes[2],
        }
    }

    /// Raw length of one sprite: every row holds `plane_width_bytes` quintets
    /// of plane bytes.
    pub fn sprite_bytes(&self) -> u32 {
        sprite_bytes(self)
    }
}

pub fn sprite_bytes(header: &TilesetHeader) -> u32 {
    header.plane_width_bytes as u32 * header.plane_height_pixels as u32 * PLANE_COUNT as u32
}

/// One tileset as it sits in the archive: its header and the raw plane bytes
/// of all of its sprites.
#[derive(Debug, Clone)]
pub struct TilesetRecord {
    pub header: TilesetHeader,
    /// Byte offset of the header within the archive.
    pub offset: u64,
    /// Archive-wide ordinal of the first sprite in this record.
    pub first_sprite: u32,
    pub data: Vec<u8>,
}

impl TilesetRecord {
    /// Yields `sprite_count` slices, empty ones included when the plane size
    /// is zero.
    pub fn sprites(&self) -> impl Iterator<Item = &[u8]> + '_ {
        let size = self.header.sprite_bytes() as usize;
        (0..self.header.sprite_count as usize)
            .map_while(move |i| self.data.get(i * size..(i + 1) * size))
    }

    pub fn sprite(&self, index: usize) -> Option<&[u8]> {
        self.sprites().nth(index)
    }
}
