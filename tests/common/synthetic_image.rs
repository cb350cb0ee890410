use image::{Rgba, RgbaImage};

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Solid opaque image of the given color.
pub fn solid(width: u32, height: u32, color: Rgba<u8>) -> RgbaImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    RgbaImage::from_pixel(width, height, color)
}

/// Paints a filled `size` x `size` square with its top-left corner at (`x`, `y`).
pub fn paint_square(image: &mut RgbaImage, x: u32, y: u32, size: u32, color: Rgba<u8>) {
    for yy in y..y + size {
        for xx in x..x + size {
            image.put_pixel(xx, yy, color);
        }
    }
}

/// Count of pixels with non-zero alpha.
pub fn opaque_count(image: &RgbaImage) -> usize {
    image.pixels().filter(|p| p.0[3] != 0).count()
}
