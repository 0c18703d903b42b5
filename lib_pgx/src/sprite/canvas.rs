use thiserror::Error;

use super::palette::{Rgba, TRANSPARENT};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CanvasError {
    #[error("coordinates ({x}, {y}) are out of bounds for a {width}x{height} canvas")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// Flat RGBA8 raster, row-major, fully transparent when created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: TRANSPARENT.repeat(width as usize * height as usize),
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn offset(&self, x: u32, y: u32) -> Result<usize, CanvasError> {
        if x >= self.width || y >= self.height {
            return Err(CanvasError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        Ok((y as usize * self.width as usize + x as usize) * 4)
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) -> Result<(), CanvasError> {
        let offset = self.offset(x, y)?;
        self.pixels[offset..offset + 4].copy_from_slice(&color);
        Ok(())
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Result<Rgba, CanvasError> {
        let offset = self.offset(x, y)?;
        let mut color = TRANSPARENT;
        color.copy_from_slice(&self.pixels[offset..offset + 4]);
        Ok(color)
    }

    pub fn rgba_data(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_rgba_data(self) -> Vec<u8> {
        self.pixels
    }
}
