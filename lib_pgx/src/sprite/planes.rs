use super::palette::{self, Rgba, TRANSPARENT};
use crate::constants::{PIXELS_PER_BYTE, PLANE_COUNT};

/// The five plane bytes covering eight horizontal pixels, in archive order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaneQuintet {
    pub transparency: u8,
    pub blue: u8,
    pub green: u8,
    pub red: u8,
    pub intensity: u8,
}

impl PlaneQuintet {
    pub fn from_bytes(bytes: [u8; PLANE_COUNT]) -> Self {
        Self {
            transparency: bytes[0],
            blue: bytes[1],
            green: bytes[2],
            red: bytes[3],
            intensity: bytes[4],
        }
    }

    /// Palette index of pixel `column` (0 is leftmost, bit 7), or `None` when
    /// the transparency bit is clear.
    pub fn index(&self, column: usize) -> Option<u8> {
        let bit = 7 - column as u8;
        let bit_of = |plane: u8| (plane >> bit) & 1;

        if bit_of(self.transparency) == 0 {
            return None;
        }

        Some(palette::palette_index(
            bit_of(self.intensity),
            bit_of(self.red),
            bit_of(self.green),
            bit_of(self.blue),
        ))
    }

    pub fn indices(&self) -> [Option<u8>; PIXELS_PER_BYTE] {
        std::array::from_fn(|column| self.index(column))
    }

    pub fn decode(&self) -> [Rgba; PIXELS_PER_BYTE] {
        std::array::from_fn(|column| self.index(column).map_or(TRANSPARENT, palette::color))
    }
}

/// Splits a sprite body into its quintets, row by row and left to right.
pub fn quintets(sprite: &[u8]) -> impl Iterator<Item = PlaneQuintet> + '_ {
    sprite.chunks_exact(PLANE_COUNT).map(|chunk| {
        PlaneQuintet::from_bytes([chunk[0], chunk[1], chunk[2], chunk[3], chunk[4]])
    })
}
