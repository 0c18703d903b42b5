use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image::ImageError;
use lib_pgx::{ConvertError, LayoutParams, ReadError};
use log::debug;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Failed to read '{path}': {source}")]
    ReadFailed { path: PathBuf, source: io::Error },

    #[error("Invalid layout file '{path}': {source}")]
    InvalidLayoutFile {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Conversion(#[from] ConvertError),

    #[error(transparent)]
    Archive(#[from] ReadError),

    #[error("Image processing error: {0}")]
    ImageError(#[from] ImageError),

    #[error("Canvas buffer does not match {width}x{height}")]
    BufferMismatch { width: u32, height: u32 },

    #[error("Sprite #{id} not found: the archive holds {total} sprites")]
    SpriteNotFound { id: u32, total: u32 },
}

pub fn read_archive(path: &Path) -> Result<Vec<u8>, ExtractError> {
    let data = fs::read(path).map_err(|source| ExtractError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {}", data.len(), path.display());
    Ok(data)
}

pub fn load_layout(path: &Path) -> Result<LayoutParams, ExtractError> {
    let text = fs::read_to_string(path).map_err(|source| ExtractError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;
    let layout = serde_json::from_str(&text).map_err(|source| ExtractError::InvalidLayoutFile {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Loaded layout {:?} from {}", layout, path.display());
    Ok(layout)
}
