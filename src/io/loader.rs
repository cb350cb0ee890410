use std::path::Path;

use image::{ImageReader, RgbaImage};
use tracing::info;

use crate::error::{Error, Result};

/// Open the source grid and promote it to RGBA.
///
/// Images without alpha become fully opaque. The format is sniffed from the
/// file contents, so a mislabelled extension still decodes.
pub fn load_grid_image(path: &Path) -> Result<RgbaImage> {
    if !path.exists() {
        return Err(Error::MissingSource {
            path: path.to_path_buf(),
        });
    }

    let decoded = ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(|source| Error::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    let image = decoded.into_rgba8();
    info!("Loaded {:?}: {}x{}", path, image.width(), image.height());
    Ok(image)
}
