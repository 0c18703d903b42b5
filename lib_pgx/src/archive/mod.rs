pub mod format;
pub mod reader;

pub use format::{sprite_bytes, TilesetHeader, TilesetRecord};
pub use reader::{summarize, ArchiveReader, ArchiveSummary, ReadError};
