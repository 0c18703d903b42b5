pub mod archive;
pub mod constants;
pub mod convert;
pub mod sprite;

use log::*;
use std::io::Write;

pub use crate::archive::{ArchiveReader, ReadError, TilesetHeader, TilesetRecord};
pub use crate::constants::{ArchiveFamily, FamilySpec};
pub use crate::convert::{convert, precheck, Conversion, ConvertError};
pub use crate::sprite::{Canvas, LayoutParams, LayoutPreset};

/// Logs to stderr as `[LEVEL file:line] message`. `RUST_LOG` overrides
/// `level` when set.
pub fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .target(env_logger::Target::Stderr)
        .filter(Some("lib_pgx"), level)
        .filter(Some("pgx_extractor"), level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
