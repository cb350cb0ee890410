use image::RgbaImage;
use image::imageops;

use crate::types::BoundingBox;

/// Smallest box containing every pixel with non-zero alpha, or `None` if the
/// image is fully transparent.
pub fn alpha_bounding_box(image: &RgbaImage) -> Option<BoundingBox> {
    let mut bbox: Option<BoundingBox> = None;
    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel.0[3] == 0 {
            continue;
        }
        bbox = Some(match bbox {
            None => BoundingBox {
                left: x,
                top: y,
                right: x + 1,
                bottom: y + 1,
            },
            Some(b) => BoundingBox {
                left: b.left.min(x),
                top: b.top.min(y),
                right: b.right.max(x + 1),
                bottom: b.bottom.max(y + 1),
            },
        });
    }
    bbox
}

/// Crop `image` to its visible content plus `padding` on each side.
///
/// The padded box never leaves the image. A fully transparent image is
/// returned unchanged. The second element is the unpadded content box.
pub fn trim_transparent(image: RgbaImage, padding: u32) -> (RgbaImage, Option<BoundingBox>) {
    let Some(content) = alpha_bounding_box(&image) else {
        return (image, None);
    };

    let crop = content.expand_clamped(padding, image.width(), image.height());
    let trimmed =
        imageops::crop_imm(&image, crop.left, crop.top, crop.width(), crop.height()).to_image();
    (trimmed, Some(content))
}
