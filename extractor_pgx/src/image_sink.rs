use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};
use lib_pgx::Canvas;
use log::info;

use crate::filemanager::ExtractError;

/// Destination for a finished canvas.
pub trait ImageSink {
    fn write(&self, canvas: Canvas) -> Result<(), ExtractError>;

    fn describe(&self) -> String;
}

pub struct PngSink {
    path: PathBuf,
}

impl PngSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ImageSink for PngSink {
    fn write(&self, canvas: Canvas) -> Result<(), ExtractError> {
        let (width, height) = canvas.dimensions();
        let image = RgbaImage::from_raw(width, height, canvas.into_rgba_data())
            .ok_or(ExtractError::BufferMismatch { width, height })?;

        image.save_with_format(&self.path, ImageFormat::Png)?;
        info!("Saved {}x{} PNG to {}", width, height, self.path.display());
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
