use std::fs;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use tracing::info;

use crate::error::{Error, Result};
use crate::types::ExtractedLogo;

/// Write one logo as `<output_dir>/logo-<index>.png`.
pub fn write_logo_png(output_dir: &Path, logo: &ExtractedLogo) -> Result<PathBuf> {
    let path = output_dir.join(logo.file_name());
    logo.image
        .save_with_format(&path, ImageFormat::Png)
        .map_err(|source| Error::Encode {
            path: path.clone(),
            source,
        })?;
    info!("Saved {}", path.display());
    Ok(path)
}

/// Create `output_dir` (and parents) and write every logo in order.
///
/// Stops at the first failure; files written before it are left in place.
pub fn write_logo_pngs(output_dir: &Path, logos: &[ExtractedLogo]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)?;
    logos
        .iter()
        .map(|logo| write_logo_png(output_dir, logo))
        .collect()
}
