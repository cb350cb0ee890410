use image::RgbaImage;
use tracing::debug;

use crate::core::processing::background::estimate_background;
use crate::core::processing::mask::mask_background;
use crate::core::processing::trim::trim_transparent;
use crate::types::{BoundingBox, CellRect, Rgb};

/// Output of the estimate -> mask -> trim chain for one cell
#[derive(Debug, Clone)]
pub struct ProcessedCell {
    pub image: RgbaImage,
    pub background: Option<Rgb>,
    /// Unpadded content box in cell coordinates; `None` if the cell was all background
    pub content: Option<BoundingBox>,
}

/// Run background removal and trimming on a single cell.
///
/// Nothing is shared between cells: the background is re-estimated here every time.
pub fn process_cell(
    rect: &CellRect,
    cell: &RgbaImage,
    tolerance: u32,
    padding: u32,
) -> ProcessedCell {
    let background = estimate_background(cell);
    let masked = match background {
        Some(bg) => mask_background(cell, bg, tolerance),
        None => cell.clone(),
    };
    let (image, content) = trim_transparent(masked, padding);

    debug!(
        "cell r{} c{} {:?}: background={:?} content={:?} -> {}x{}",
        rect.row,
        rect.col,
        rect.bounds,
        background,
        content,
        image.width(),
        image.height()
    );

    ProcessedCell {
        image,
        background,
        content,
    }
}
