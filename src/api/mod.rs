//! High-level, ergonomic library API: extract logos from a grid image into
//! in-memory buffers or straight to a directory of PNGs. Prefer these
//! entrypoints over the low-level processing modules when embedding logogrid.
use std::path::{Path, PathBuf};

use image::RgbaImage;
use rayon::prelude::*;
use tracing::info;

use crate::core::params::ExtractParams;
use crate::core::processing::grid::slice_cells;
use crate::core::processing::pipeline::process_cell;
use crate::error::Result;
use crate::io::load_grid_image;
use crate::io::writers::manifest::{Manifest, write_manifest};
use crate::io::writers::png::write_logo_pngs;
use crate::types::ExtractedLogo;

/// Summary of a run written to disk
#[derive(Debug, Clone, Default)]
pub struct ExtractReport {
    /// Written PNGs in row-major order
    pub files: Vec<PathBuf>,
    /// Cells where nothing survived background removal
    pub empty: usize,
    pub manifest: Option<PathBuf>,
}

/// Slice an in-memory grid and extract every cell (no disk I/O).
///
/// Cells are processed in parallel; the result is always row-major with
/// 1-based indices.
pub fn extract_image(image: &RgbaImage, params: &ExtractParams) -> Result<Vec<ExtractedLogo>> {
    params.validate(image.width(), image.height())?;

    let cells = slice_cells(image, params.grid());
    let logos = cells
        .into_par_iter()
        .enumerate()
        .map(|(i, (rect, cell))| {
            let processed = process_cell(&rect, &cell, params.tolerance, params.padding);
            ExtractedLogo {
                index: i + 1,
                cell: rect,
                background: processed.background,
                content: processed.content,
                image: processed.image,
            }
        })
        .collect();
    Ok(logos)
}

/// Load a grid image from disk and extract every cell into memory.
pub fn extract_grid_to_buffers(
    input: &Path,
    params: &ExtractParams,
) -> Result<Vec<ExtractedLogo>> {
    let image = load_grid_image(input)?;
    extract_image(&image, params)
}

/// Write extracted logos as `logo-NN.png` files, creating `output_dir` if needed.
pub fn write_logos(logos: &[ExtractedLogo], output_dir: &Path) -> Result<Vec<PathBuf>> {
    write_logo_pngs(output_dir, logos)
}

/// Full pipeline: load, slice, remove backgrounds, trim, and write.
///
/// With `manifest` set, a `logos.json` sidecar is written after the PNGs.
pub fn extract_grid_to_dir(
    input: &Path,
    output_dir: &Path,
    params: &ExtractParams,
    manifest: bool,
) -> Result<ExtractReport> {
    let image = load_grid_image(input)?;
    let logos = extract_image(&image, params)?;
    info!(
        "Extracting {} cells ({} grid) from {:?}",
        logos.len(),
        params.grid(),
        input
    );

    let files = write_logos(&logos, output_dir)?;
    let empty = logos.iter().filter(|l| l.is_empty()).count();

    let manifest = if manifest {
        let sidecar = Manifest::new(input, image.dimensions(), params, &logos);
        Some(write_manifest(output_dir, &sidecar)?)
    } else {
        None
    };

    Ok(ExtractReport {
        files,
        empty,
        manifest,
    })
}
