use image::RgbaImage;

use crate::types::Rgb;

/// Width in pixels of the border band sampled for the background estimate.
pub const BORDER_BAND: u32 = 3;

/// Collect the border band of `cell` as opaque color triples.
///
/// Horizontal bands are walked first (top and bottom rows interleaved per
/// column), then vertical bands (left and right interleaved per row). Corner
/// pixels therefore appear once per contributing edge.
pub fn border_samples(cell: &RgbaImage) -> Vec<Rgb> {
    let (width, height) = cell.dimensions();
    let band_h = BORDER_BAND.min(height);
    let band_w = BORDER_BAND.min(width);

    let rgb_at = |x: u32, y: u32| {
        let p = cell.get_pixel(x, y).0;
        Rgb([p[0], p[1], p[2]])
    };

    let mut samples = Vec::with_capacity(2 * (width * band_h + height * band_w) as usize);
    for x in 0..width {
        for y in 0..band_h {
            samples.push(rgb_at(x, y));
            samples.push(rgb_at(x, height - 1 - y));
        }
    }
    for y in 0..height {
        for x in 0..band_w {
            samples.push(rgb_at(x, y));
            samples.push(rgb_at(width - 1 - x, y));
        }
    }
    samples
}

/// Pick the middle element of `samples` ordered by channel sum.
///
/// The sort is stable, so samples with equal sums keep their sampling order.
pub fn median_by_channel_sum(mut samples: Vec<Rgb>) -> Option<Rgb> {
    if samples.is_empty() {
        return None;
    }
    samples.sort_by_key(Rgb::channel_sum);
    Some(samples[samples.len() / 2])
}

/// Estimate the background color of a cell from its border band.
///
/// Alpha is ignored. Returns `None` only for an empty cell.
pub fn estimate_background(cell: &RgbaImage) -> Option<Rgb> {
    median_by_channel_sum(border_samples(cell))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn solid_cell_estimates_its_color() {
        let cell = RgbaImage::from_pixel(20, 20, Rgba([12, 200, 40, 255]));
        assert_eq!(estimate_background(&cell), Some(Rgb([12, 200, 40])));
    }

    #[test]
    fn sample_count_counts_corners_per_edge() {
        let cell = RgbaImage::new(10, 8);
        // 2 * (10 * 3) horizontal + 2 * (8 * 3) vertical
        assert_eq!(border_samples(&cell).len(), 60 + 48);
    }

    #[test]
    fn thin_cells_sample_in_bounds() {
        let cell = RgbaImage::from_pixel(2, 1, Rgba([9, 9, 9, 255]));
        let samples = border_samples(&cell);
        assert_eq!(samples.len(), 2 * 2 + 2 * 2);
        assert!(samples.iter().all(|s| *s == Rgb([9, 9, 9])));
    }

    #[test]
    fn minority_of_foreground_on_border_is_ignored() {
        let mut cell = RgbaImage::from_pixel(30, 30, Rgba([250, 250, 250, 255]));
        for x in 0..8 {
            for y in 0..3 {
                cell.put_pixel(x, y, Rgba([10, 10, 10, 255]));
            }
        }
        assert_eq!(estimate_background(&cell), Some(Rgb([250, 250, 250])));
    }

    #[test]
    fn selection_uses_channel_sum_not_per_channel_median() {
        // Same sum, different channels: the stable sort keeps the first sampled.
        let samples = vec![Rgb([30, 0, 0]), Rgb([0, 30, 0]), Rgb([0, 0, 30])];
        assert_eq!(median_by_channel_sum(samples), Some(Rgb([0, 30, 0])));

        let samples = vec![Rgb([200, 0, 0]), Rgb([0, 0, 10]), Rgb([0, 100, 0])];
        assert_eq!(median_by_channel_sum(samples), Some(Rgb([0, 100, 0])));
    }

    #[test]
    fn estimate_is_deterministic() {
        let cell = RgbaImage::from_fn(16, 12, |x, y| {
            Rgba([(x * 13) as u8, (y * 29) as u8, ((x + y) * 7) as u8, 255])
        });
        assert_eq!(estimate_background(&cell), estimate_background(&cell));
    }

    #[test]
    fn alpha_is_ignored() {
        let cell = RgbaImage::from_pixel(5, 5, Rgba([1, 2, 3, 0]));
        assert_eq!(estimate_background(&cell), Some(Rgb([1, 2, 3])));
    }

    #[test]
    fn empty_cell_has_no_estimate() {
        assert_eq!(estimate_background(&RgbaImage::new(0, 0)), None);
    }
}
