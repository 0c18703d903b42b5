mod app;
mod filemanager;
mod image_sink;
mod preview;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use lib_pgx::{ArchiveFamily, LayoutPreset};
use log::LevelFilter;

use app::Extractor;
use image_sink::{ImageSink, PngSink};

/// Extracts every sprite of a ProGraphx Toolbox tileset archive (e.g. CC1.GFX)
/// into a single PNG sprite sheet.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Tileset archive to read
    archive: PathBuf,

    /// Sprite sheet layout: "four-column" or "dense"
    #[arg(long, default_value_t = LayoutPreset::FourColumn)]
    layout: LayoutPreset,

    /// JSON file with a custom layout (columns, filler_skip, group_size, precheck)
    #[arg(long, value_name = "FILE", conflicts_with = "layout")]
    layout_file: Option<PathBuf>,

    /// Archive family the canvas is sized for
    #[arg(long, default_value_t = ArchiveFamily::Cc1)]
    family: ArchiveFamily,

    /// Where to write the sprite sheet
    #[arg(short, long, default_value = "sprites.png")]
    output: PathBuf,

    /// Print the tileset headers instead of extracting
    #[arg(long, conflicts_with = "emoji")]
    list: bool,

    /// Print one sprite as emoji instead of extracting
    #[arg(long, value_name = "SPRITE_ID")]
    emoji: Option<u32>,

    /// Log every decoding step
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    lib_pgx::init_logging(if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });

    let family = args.family.spec();
    let extractor = Extractor::open(&args.archive, family)?;

    if args.list {
        print!("{}", extractor.list()?);
        return Ok(());
    }

    if let Some(sprite_id) = args.emoji {
        print!("{}", extractor.emoji(sprite_id)?);
        return Ok(());
    }

    let layout = match &args.layout_file {
        Some(path) => filemanager::load_layout(path)?,
        None => args.layout.params(&family),
    };

    let sink = PngSink::new(&args.output);
    let written = extractor.extract(&layout, &sink)?;
    println!("Wrote {} sprites to '{}'.", written, sink.describe());

    Ok(())
}
