//! Shared value types used across logogrid.
//! Includes `GridSpec`, `CellRect`, `Rgb`, `BoundingBox`, and the
//! `ExtractedLogo` produced for every cell.
use image::RgbaImage;
use serde::{Deserialize, Serialize};

/// Row/column partition of a source grid image.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct GridSpec {
    pub rows: u32,
    pub cols: u32,
}

impl GridSpec {
    pub fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }
}

impl std::fmt::Display for GridSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Axis-aligned pixel box; `right` and `bottom` are exclusive.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// Grow by `padding` on every side, clamped to `[0, width) x [0, height)`.
    pub fn expand_clamped(&self, padding: u32, width: u32, height: u32) -> BoundingBox {
        BoundingBox {
            left: self.left.saturating_sub(padding),
            top: self.top.saturating_sub(padding),
            right: self.right.saturating_add(padding).min(width),
            bottom: self.bottom.saturating_add(padding).min(height),
        }
    }
}

/// One cell of the grid, located in source image coordinates.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct CellRect {
    pub row: u32,
    pub col: u32,
    #[serde(flatten)]
    pub bounds: BoundingBox,
}

impl CellRect {
    pub fn width(&self) -> u32 {
        self.bounds.width()
    }

    pub fn height(&self) -> u32 {
        self.bounds.height()
    }
}

/// Opaque color triple, e.g. an estimated cell background.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub fn r(&self) -> u8 {
        self.0[0]
    }

    pub fn g(&self) -> u8 {
        self.0[1]
    }

    pub fn b(&self) -> u8 {
        self.0[2]
    }

    /// Sum of the three channels, used as a cheap luminance proxy.
    pub fn channel_sum(&self) -> u16 {
        self.0.iter().map(|&c| c as u16).sum()
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r(), self.g(), self.b())
    }
}

/// A processed cell, ready to be written as `logo-<index>.png`.
#[derive(Debug, Clone)]
pub struct ExtractedLogo {
    /// 1-based position in row-major order
    pub index: usize,
    pub cell: CellRect,
    pub background: Option<Rgb>,
    /// Unpadded content box in cell coordinates
    pub content: Option<BoundingBox>,
    pub image: RgbaImage,
}

impl ExtractedLogo {
    pub fn file_name(&self) -> String {
        logo_file_name(self.index)
    }

    /// True when masking left nothing visible in the cell.
    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }
}

/// Output file name for the logo at 1-based `index`.
pub fn logo_file_name(index: usize) -> String {
    format!("logo-{index:02}.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_clamps_to_image_bounds() {
        let bbox = BoundingBox {
            left: 2,
            top: 5,
            right: 18,
            bottom: 9,
        };
        let grown = bbox.expand_clamped(4, 20, 12);
        assert_eq!(
            grown,
            BoundingBox {
                left: 0,
                top: 1,
                right: 20,
                bottom: 12,
            }
        );
    }

    #[test]
    fn file_names_are_zero_padded() {
        assert_eq!(logo_file_name(1), "logo-01.png");
        assert_eq!(logo_file_name(16), "logo-16.png");
        assert_eq!(logo_file_name(120), "logo-120.png");
    }

    #[test]
    fn channel_sum_does_not_overflow() {
        assert_eq!(Rgb([255, 255, 255]).channel_sum(), 765);
    }
}
