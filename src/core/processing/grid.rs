use image::RgbaImage;
use image::imageops;

use crate::types::{BoundingBox, CellRect, GridSpec};

/// Round a fractional boundary to a pixel edge (ties to even), clamped to `limit`.
fn boundary(index: u32, cell_size: f64, limit: u32) -> u32 {
    let edge = (index as f64 * cell_size).round_ties_even();
    (edge.max(0.0) as u32).min(limit)
}

/// Compute the rectangles of a `grid` over a `width` x `height` image in row-major order.
///
/// Every corner is derived from the same `round(i * size / count)` formula, so
/// neighbouring cells share their edge exactly and the cells tile the image.
pub fn cell_rects(width: u32, height: u32, grid: GridSpec) -> Vec<CellRect> {
    let cell_w = width as f64 / grid.cols as f64;
    let cell_h = height as f64 / grid.rows as f64;

    let mut rects = Vec::with_capacity(grid.cell_count());
    for row in 0..grid.rows {
        for col in 0..grid.cols {
            rects.push(CellRect {
                row,
                col,
                bounds: BoundingBox {
                    left: boundary(col, cell_w, width),
                    top: boundary(row, cell_h, height),
                    right: boundary(col + 1, cell_w, width),
                    bottom: boundary(row + 1, cell_h, height),
                },
            });
        }
    }
    rects
}

/// Copy a single cell out of the source image.
pub fn crop_cell(image: &RgbaImage, rect: &CellRect) -> RgbaImage {
    imageops::crop_imm(
        image,
        rect.bounds.left,
        rect.bounds.top,
        rect.width(),
        rect.height(),
    )
    .to_image()
}

/// Slice the source image into owned cell images, row-major.
pub fn slice_cells(image: &RgbaImage, grid: GridSpec) -> Vec<(CellRect, RgbaImage)> {
    cell_rects(image.width(), image.height(), grid)
        .into_iter()
        .map(|rect| {
            let cell = crop_cell(image, &rect);
            (rect, cell)
        })
        .collect()
}
