use log::debug;
use thiserror::Error;

use super::canvas::{Canvas, CanvasError};
use super::layout::LayoutParams;
use super::planes;
use crate::archive::TilesetRecord;
use crate::constants::CELL_SIZE;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("sprite #{sprite_index} (cell slot {slot}) does not fit the canvas")]
pub struct DrawError {
    pub sprite_index: u32,
    pub slot: u32,
    #[source]
    pub source: CanvasError,
}

/// Draws decoded sprites onto a canvas it borrows for the whole conversion.
pub struct Compositor<'a> {
    canvas: &'a mut Canvas,
    layout: LayoutParams,
    slot: u32,
    sprites_drawn: u32,
}

impl<'a> Compositor<'a> {
    pub fn new(canvas: &'a mut Canvas, layout: LayoutParams) -> Self {
        Self {
            canvas,
            layout,
            slot: 0,
            sprites_drawn: 0,
        }
    }

    pub fn sprites_drawn(&self) -> u32 {
        self.sprites_drawn
    }

    /// Grid slot the next sprite will occupy.
    pub fn next_slot(&self) -> u32 {
        self.slot
    }

    /// Draws every sprite of `record`, then skips the layout's filler cells.
    pub fn draw_record(&mut self, record: &TilesetRecord) -> Result<(), DrawError> {
        debug!(
            "Drawing tileset at offset {}: {} sprites from slot {}",
            record.offset, record.header.sprite_count, self.slot
        );

        for sprite in record.sprites() {
            let origin = self.layout.cell_origin(self.slot);
            draw_sprite(self.canvas, origin, sprite).map_err(|source| DrawError {
                sprite_index: self.sprites_drawn,
                slot: self.slot,
                source,
            })?;

            self.slot = self.slot.saturating_add(1);
            self.sprites_drawn += 1;
        }

        self.slot = self.slot.saturating_add(self.layout.filler_skip);
        Ok(())
    }
}

/// Writes one sprite body into the cell whose top-left pixel is `origin`.
///
/// The cursor wraps every `CELL_SIZE` pixels whatever the sprite's own width.
pub fn draw_sprite(
    canvas: &mut Canvas,
    origin: (u32, u32),
    sprite: &[u8],
) -> Result<(), CanvasError> {
    let (x_start, _) = origin;
    let (mut x, mut y) = origin;

    for quintet in planes::quintets(sprite) {
        for color in quintet.decode() {
            canvas.set_pixel(x, y, color)?;

            x += 1;
            if x == x_start + CELL_SIZE {
                y += 1;
                x = x_start;
            }
        }
    }

    Ok(())
}
