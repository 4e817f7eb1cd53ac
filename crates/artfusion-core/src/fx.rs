//! Lighting effects: radial vignette and additive glow.

use crate::buffer::{quantize, BgrImage};
use crate::filters::{coerce_kernel_size, gaussian};

/// Default glow blur kernel.
pub const DEFAULT_GLOW_KERNEL: i32 = 21;

/// Darken toward the corners.
///
/// Each pixel is scaled by `clip(1 - strength * r / max_r, 0, 1)` where `r` is
/// its distance to `(w/2, h/2)` and `max_r` the distance from that center to
/// the origin. The center pixel keeps its value and the origin is scaled by
/// `1 - strength`.
pub fn vignette(image: &BgrImage, strength: f32) -> BgrImage {
    let cx = image.width as f32 / 2.0;
    let cy = image.height as f32 / 2.0;
    let max_r = (cx * cx + cy * cy).sqrt();
    if max_r <= 0.0 {
        return image.clone();
    }

    let width = image.width as usize;
    let mut out = Vec::with_capacity(image.pixels().len());
    for (i, px) in image.pixels().chunks_exact(3).enumerate() {
        let dx = (i % width) as f32 - cx;
        let dy = (i / width) as f32 - cy;
        let r = (dx * dx + dy * dy).sqrt();
        let factor = (1.0 - strength * r / max_r).clamp(0.0, 1.0);
        out.extend(px.iter().map(|&v| quantize(v as f32 * factor)));
    }
    BgrImage::new(image.width, image.height, out)
}

/// Add a blurred copy on top of the image: `original + amount * blur(original, k)`.
///
/// `blur_kernel` is coerced to an odd value of at least 1.
pub fn glow(image: &BgrImage, amount: f32, blur_kernel: i32) -> BgrImage {
    let ksize = coerce_kernel_size(blur_kernel);
    let blurred = gaussian::gaussian_blur_u8(
        image.pixels(),
        image.width as usize,
        image.height as usize,
        3,
        ksize,
        0.0,
    );
    let out = image
        .pixels()
        .iter()
        .zip(blurred)
        .map(|(&o, bl)| quantize(o as f32 + amount * bl as f32))
        .collect();
    BgrImage::new(image.width, image.height, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vignette_center_unchanged() {
        let img = BgrImage::filled(8, 6, [200, 150, 100]);
        let out = vignette(&img, 0.8);
        assert_eq!(out.pixel(4, 3), [200, 150, 100]);
    }

    #[test]
    fn test_vignette_corner_scaled() {
        let img = BgrImage::filled(8, 6, [200, 150, 100]);
        let out = vignette(&img, 0.5);
        assert_eq!(out.pixel(0, 0), [100, 75, 50]);
    }

    #[test]
    fn test_vignette_zero_strength_identity() {
        let img = BgrImage::new(2, 1, vec![1, 2, 3, 250, 251, 252]);
        assert_eq!(vignette(&img, 0.0), img);
    }

    #[test]
    fn test_vignette_strong_clamps_to_black() {
        let img = BgrImage::filled(8, 6, [200, 150, 100]);
        let out = vignette(&img, 3.0);
        assert_eq!(out.pixel(0, 0), [0, 0, 0]);
    }

    #[test]
    fn test_vignette_monotonic_along_row() {
        let img = BgrImage::filled(10, 10, [255, 255, 255]);
        let out = vignette(&img, 1.0);
        for x in 0..5 {
            assert!(out.pixel(x, 5)[0] <= out.pixel(x + 1, 5)[0]);
        }
    }

    #[test]
    fn test_vignette_single_pixel() {
        // max_r = sqrt(0.5) > 0 for a 1x1 image
        let img = BgrImage::filled(1, 1, [80, 80, 80]);
        assert_eq!(vignette(&img, 0.6).dimensions(), (1, 1));
        assert_eq!(vignette(&BgrImage::zeros(0, 0), 0.6), BgrImage::zeros(0, 0));
    }

    #[test]
    fn test_glow_constant_image() {
        let img = BgrImage::filled(5, 5, [100, 100, 100]);
        let out = glow(&img, 0.5, DEFAULT_GLOW_KERNEL);
        assert_eq!(out.pixel(2, 2), [150, 150, 150]);
    }

    #[test]
    fn test_glow_saturates() {
        let img = BgrImage::filled(4, 4, [200, 200, 200]);
        assert_eq!(glow(&img, 1.0, 5), BgrImage::filled(4, 4, [255, 255, 255]));
    }

    #[test]
    fn test_glow_zero_amount_identity() {
        let img = BgrImage::new(3, 1, vec![0, 10, 20, 30, 40, 50, 60, 70, 80]);
        assert_eq!(glow(&img, 0.0, 21), img);
    }

    #[test]
    fn test_glow_nonpositive_kernel_adds_copy() {
        let img = BgrImage::filled(2, 2, [60, 60, 60]);
        assert_eq!(glow(&img, 1.0, 0), BgrImage::filled(2, 2, [120, 120, 120]));
    }
}
