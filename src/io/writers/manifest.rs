use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::params::ExtractParams;
use crate::error::Result;
use crate::types::{BoundingBox, CellRect, ExtractedLogo, Rgb};

pub const MANIFEST_FILE_NAME: &str = "logos.json";

/// One written logo as recorded in the sidecar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub index: usize,
    pub file: String,
    pub row: u32,
    pub col: u32,
    pub cell: BoundingBox,
    pub background: Option<Rgb>,
    pub content: Option<BoundingBox>,
    pub width: u32,
    pub height: u32,
}

impl ManifestEntry {
    pub fn from_logo(logo: &ExtractedLogo) -> Self {
        let CellRect { row, col, bounds } = logo.cell;
        Self {
            index: logo.index,
            file: logo.file_name(),
            row,
            col,
            cell: bounds,
            background: logo.background,
            content: logo.content,
            width: logo.image.width(),
            height: logo.image.height(),
        }
    }
}

/// JSON sidecar describing a whole extraction run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub source: PathBuf,
    pub source_width: u32,
    pub source_height: u32,
    pub params: ExtractParams,
    pub logos: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn new(
        source: &Path,
        source_dims: (u32, u32),
        params: &ExtractParams,
        logos: &[ExtractedLogo],
    ) -> Self {
        Self {
            source: source.to_path_buf(),
            source_width: source_dims.0,
            source_height: source_dims.1,
            params: params.clone(),
            logos: logos.iter().map(ManifestEntry::from_logo).collect(),
        }
    }
}

/// Write `manifest` as pretty JSON to `<output_dir>/logos.json`.
pub fn write_manifest(output_dir: &Path, manifest: &Manifest) -> Result<PathBuf> {
    let path = output_dir.join(MANIFEST_FILE_NAME);
    let writer = BufWriter::new(File::create(&path)?);
    serde_json::to_writer_pretty(writer, manifest)?;
    info!("Wrote manifest {}", path.display());
    Ok(path)
}
