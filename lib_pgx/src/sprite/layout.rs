use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{FamilySpec, CELL_SIZE};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LayoutError {
    #[error("layout must have at least one column")]
    ZeroColumns,
    #[error("layout of {columns} columns and {slots} cells does not fit a 32-bit canvas")]
    TooLarge { columns: u32, slots: u64 },
}

/// Where sprites land on the canvas.
///
/// Sprite slot `n` maps to cell `(n % columns, n / columns)`. After every
/// tileset the slot counter jumps ahead by `filler_skip` empty cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutParams {
    pub columns: u32,
    #[serde(default)]
    pub filler_skip: u32,
    /// Sprites per tileset the canvas is sized for; `0` takes the family's.
    #[serde(default)]
    pub group_size: u32,
    /// Count every sprite before drawing and refuse archives whose total
    /// differs from the family's.
    #[serde(default)]
    pub precheck: bool,
}

impl LayoutParams {
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.columns == 0 {
            return Err(LayoutError::ZeroColumns);
        }
        Ok(())
    }

    pub fn cell(&self, slot: u32) -> (u32, u32) {
        (slot % self.columns, slot / self.columns)
    }

    /// Top-left pixel of the cell for `slot`.
    ///
    /// Saturates instead of wrapping, so a slot past the canvas still lands
    /// outside it.
    pub fn cell_origin(&self, slot: u32) -> (u32, u32) {
        let (col, row) = self.cell(slot);
        (col.saturating_mul(CELL_SIZE), row.saturating_mul(CELL_SIZE))
    }

    /// Cells needed for a whole archive of `family`, filler included.
    pub fn slots(&self, family: &FamilySpec) -> Result<u32, LayoutError> {
        if self.filler_skip == 0 {
            return Ok(family.total_sprites());
        }

        let group_size = match self.group_size {
            0 => family.sprites_per_tileset,
            n => n,
        };
        let slots = family.tilesets as u64 * (group_size as u64 + self.filler_skip as u64);
        u32::try_from(slots).map_err(|_| self.too_large(slots))
    }

    /// Canvas width and height in pixels.
    ///
    /// Fails when either side, or the pixel count, overflows `u32`.
    pub fn canvas_size(&self, family: &FamilySpec) -> Result<(u32, u32), LayoutError> {
        self.validate()?;
        let slots = self.slots(family)?;
        let rows = slots.div_ceil(self.columns);

        let size = self
            .columns
            .checked_mul(CELL_SIZE)
            .zip(rows.checked_mul(CELL_SIZE))
            .filter(|&(width, height)| width.checked_mul(height).is_some());
        size.ok_or_else(|| self.too_large(slots as u64))
    }

    fn too_large(&self, slots: u64) -> LayoutError {
        LayoutError::TooLarge {
            columns: self.columns,
            slots,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutPreset {
    /// Four columns; every tileset starts on a fresh row thanks to two filler
    /// cells.
    #[default]
    FourColumn,
    /// Smallest square grid holding every sprite, no filler, total checked
    /// up front.
    Dense,
}

impl LayoutPreset {
    pub const ALL: [LayoutPreset; 2] = [LayoutPreset::FourColumn, LayoutPreset::Dense];

    pub fn name(&self) -> &'static str {
        match self {
            LayoutPreset::FourColumn => "four-column",
            LayoutPreset::Dense => "dense",
        }
    }

    pub fn params(&self, family: &FamilySpec) -> LayoutParams {
        match self {
            LayoutPreset::FourColumn => LayoutParams {
                columns: 4,
                filler_skip: 2,
                group_size: family.sprites_per_tileset,
                precheck: false,
            },
            LayoutPreset::Dense => LayoutParams {
                columns: square_side(family.total_sprites()),
                filler_skip: 0,
                group_size: 0,
                precheck: true,
            },
        }
    }
}

impl fmt::Display for LayoutPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LayoutPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown layout '{}' (expected four-column or dense)", s))
    }
}

/// Smallest `n` with `n * n >= count`, at least 1.
fn square_side(count: u32) -> u32 {
    let mut side = 1u32;
    while (side as u64) * (side as u64) < count as u64 {
        side += 1;
    }
    side
}
