use std::fmt;
use std::str::FromStr;

pub const FORMAT_NAME: &str = "ProGraphx Toolbox tileset";
pub const FILE_EXT: &str = "GFX";

/// Side of the square cell every sprite is drawn into, in pixels.
pub const CELL_SIZE: u32 = 16;

/// Transparency, blue, green, red and intensity.
pub const PLANE_COUNT: usize = 5;

/// Horizontal pixels covered by one plane byte.
pub const PIXELS_PER_BYTE: usize = 8;

/// `sprite_count`, `plane_width_bytes`, `plane_height_pixels`.
pub const HEADER_SIZE: usize = 3;

/// Shape of a known archive: how many tilesets it holds and how many
/// sprites each of them carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilySpec {
    pub name: &'static str,
    pub tilesets: u32,
    pub sprites_per_tileset: u32,
}

impl FamilySpec {
    pub const fn total_sprites(&self) -> u32 {
        self.tilesets * self.sprites_per_tileset
    }
}

/// Crystal Caves episode 1 (`CC1.GFX`): 23 tilesets of 50 sprites.
pub const CC1: FamilySpec = FamilySpec {
    name: "cc1",
    tilesets: 23,
    sprites_per_tileset: 50,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArchiveFamily {
    #[default]
    Cc1,
}

impl ArchiveFamily {
    pub const ALL: [ArchiveFamily; 1] = [ArchiveFamily::Cc1];

    pub fn spec(&self) -> FamilySpec {
        match self {
            ArchiveFamily::Cc1 => CC1,
        }
    }
}

impl fmt::Display for ArchiveFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spec().name)
    }
}

impl FromStr for ArchiveFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|family| family.spec().name.eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown archive family '{}'", s))
    }
}
