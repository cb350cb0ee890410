use image::{Rgba, RgbaImage};

use crate::types::Rgb;

/// Channels at or above this value on all of r, g and b count as near-white.
pub const NEAR_WHITE_THRESHOLD: u8 = 225;

/// True when every channel is within `tolerance` (inclusive) of `background`.
///
/// Any tolerance of 255 or more matches every pixel.
pub fn is_near_background(pixel: &Rgba<u8>, background: Rgb, tolerance: u32) -> bool {
    pixel.0[..3]
        .iter()
        .zip(background.0.iter())
        .all(|(&c, &bg)| u32::from(c.abs_diff(bg)) <= tolerance)
}

/// True when every channel is at least `NEAR_WHITE_THRESHOLD`.
pub fn is_near_white(pixel: &Rgba<u8>) -> bool {
    pixel.0[..3].iter().all(|&c| c >= NEAR_WHITE_THRESHOLD)
}

/// Return a copy of `cell` with alpha zeroed wherever the pixel matches the
/// background or is near-white. Color channels are never modified.
pub fn mask_background(cell: &RgbaImage, background: Rgb, tolerance: u32) -> RgbaImage {
    let mut out = cell.clone();
    for pixel in out.pixels_mut() {
        if is_near_background(pixel, background, tolerance) || is_near_white(pixel) {
            pixel.0[3] = 0;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Rgb = Rgb([100, 120, 140]);

    #[test]
    fn tolerance_boundary_is_inclusive() {
        let at = Rgba([128, 148, 168, 255]);
        let below = Rgba([72, 92, 112, 255]);
        let past = Rgba([129, 148, 168, 255]);
        assert!(is_near_background(&at, BG, 28));
        assert!(is_near_background(&below, BG, 28));
        assert!(!is_near_background(&past, BG, 28));
    }

    #[test]
    fn near_background_is_a_per_channel_cube() {
        // Every channel off by the full tolerance still matches.
        assert!(is_near_background(&Rgba([110, 130, 150, 255]), BG, 10));
        // One channel out of range is enough to keep the pixel.
        assert!(!is_near_background(&Rgba([100, 120, 151, 255]), BG, 10));
    }

    #[test]
    fn near_white_threshold_is_absolute() {
        assert!(is_near_white(&Rgba([225, 225, 225, 255])));
        assert!(is_near_white(&Rgba([255, 240, 230, 10])));
        assert!(!is_near_white(&Rgba([224, 255, 255, 255])));
    }

    #[test]
    fn masking_only_touches_alpha() {
        let mut cell = RgbaImage::from_pixel(3, 1, Rgba([100, 120, 140, 255]));
        cell.put_pixel(1, 0, Rgba([0, 0, 0, 200]));
        cell.put_pixel(2, 0, Rgba([230, 231, 232, 255]));

        let masked = mask_background(&cell, BG, 5);
        assert_eq!(masked.get_pixel(0, 0), &Rgba([100, 120, 140, 0]));
        assert_eq!(masked.get_pixel(1, 0), &Rgba([0, 0, 0, 200]));
        assert_eq!(masked.get_pixel(2, 0), &Rgba([230, 231, 232, 0]));
    }

    #[test]
    fn tolerance_above_channel_range_clears_everything() {
        let cell = RgbaImage::from_fn(8, 8, |x, y| {
            Rgba([(x * 30) as u8, 0, (y * 30) as u8, 255])
        });
        let masked = mask_background(&cell, Rgb([0, 255, 0]), 300);
        assert!(masked.pixels().all(|p| p.0[3] == 0));
        assert!(is_near_background(&Rgba([255, 255, 255, 255]), Rgb([0, 0, 0]), 255));
        assert!(!is_near_background(&Rgba([255, 0, 0, 255]), Rgb([0, 0, 0]), 254));
    }

    #[test]
    fn masking_is_idempotent() {
        let cell = RgbaImage::from_fn(24, 24, |x, y| {
            Rgba([(x * 11) as u8, (y * 10) as u8, ((x * y) % 256) as u8, 255])
        });
        let once = mask_background(&cell, BG, 28);
        let twice = mask_background(&once, BG, 28);
        assert_eq!(once, twice);
    }
}
