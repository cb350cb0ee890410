use clap::Parser;
use std::path::PathBuf;

use logogrid::core::params::{DEFAULT_COLS, DEFAULT_PADDING, DEFAULT_ROWS, DEFAULT_TOLERANCE};

#[derive(Parser)]
#[command(
    name = "logogrid",
    version,
    about = "Extract transparent logos from a grid image"
)]
pub struct CliArgs {
    /// Path to source grid image
    #[arg(short, long, default_value = "public/trusted-logos/source-grid.png")]
    pub input: PathBuf,

    /// Output directory (created if missing)
    #[arg(short, long, default_value = "public/trusted-logos")]
    pub output: PathBuf,

    /// Grid rows
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    pub rows: u32,

    /// Grid columns
    #[arg(long, default_value_t = DEFAULT_COLS)]
    pub cols: u32,

    /// Background color tolerance per channel (higher removes more)
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: u32,

    /// Transparent padding around each trimmed logo
    #[arg(long, default_value_t = DEFAULT_PADDING)]
    pub padding: u32,

    /// Also write a logos.json manifest next to the PNGs
    #[arg(long, default_value_t = false)]
    pub manifest: bool,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
