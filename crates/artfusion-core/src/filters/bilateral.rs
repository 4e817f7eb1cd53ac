//! Edge-preserving bilateral smoothing.
//!
//! Each output pixel is a weighted mean over a circular window. The weight is
//! the product of a spatial Gaussian on the offset and a range Gaussian on
//! the summed absolute BGR difference to the center pixel:
//!
//! `w = exp(-(dx² + dy²) / 2σs²) · exp(-(|Δb| + |Δg| + |Δr|)² / 2σc²)`

use super::gaussian::reflect_101;
use crate::buffer::{quantize, BgrImage};

/// Largest possible L1 distance between two BGR pixels.
const MAX_COLOR_DISTANCE: usize = 255 * 3;

/// Apply a bilateral filter.
///
/// # Arguments
/// * `image` - Source image
/// * `diameter` - Window diameter in pixels; the window radius is `diameter / 2`
/// * `sigma_color` - Range sigma in 8-bit units (non-positive becomes 1)
/// * `sigma_space` - Spatial sigma in pixels (non-positive becomes 1)
pub fn bilateral_filter(
    image: &BgrImage,
    diameter: u32,
    sigma_color: f32,
    sigma_space: f32,
) -> BgrImage {
    let w = image.width as usize;
    let h = image.height as usize;
    if w == 0 || h == 0 {
        return image.clone();
    }

    let sigma_color = if sigma_color <= 0.0 { 1.0 } else { sigma_color };
    let sigma_space = if sigma_space <= 0.0 { 1.0 } else { sigma_space };
    let radius = (diameter / 2).max(1) as isize;

    let color_coeff = -0.5 / (sigma_color * sigma_color);
    let color_weights: Vec<f32> = (0..=MAX_COLOR_DISTANCE)
        .map(|d| ((d * d) as f32 * color_coeff).exp())
        .collect();

    let space_coeff = -0.5 / (sigma_space * sigma_space);
    let mut window = Vec::new();
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let dist_sq = dx * dx + dy * dy;
            if dist_sq > radius * radius {
                continue;
            }
            window.push((dx, dy, (dist_sq as f32 * space_coeff).exp()));
        }
    }

    let src = image.pixels();
    let mut out = vec![0u8; src.len()];

    for y in 0..h {
        for x in 0..w {
            let ci = (y * w + x) * 3;
            let (cb, cg, cr) = (src[ci] as i32, src[ci + 1] as i32, src[ci + 2] as i32);

            let mut sum = [0.0f32; 3];
            let mut weight_sum = 0.0f32;

            for &(dx, dy, space_weight) in &window {
                let sx = reflect_101(x as isize + dx, w);
                let sy = reflect_101(y as isize + dy, h);
                let si = (sy * w + sx) * 3;
                let (pb, pg, pr) = (src[si] as i32, src[si + 1] as i32, src[si + 2] as i32);

                let diff = ((pb - cb).abs() + (pg - cg).abs() + (pr - cr).abs()) as usize;
                let weight = space_weight * color_weights[diff];

                sum[0] += pb as f32 * weight;
                sum[1] += pg as f32 * weight;
                sum[2] += pr as f32 * weight;
                weight_sum += weight;
            }

            // The center sample always has weight 1, so weight_sum > 0
            out[ci] = quantize(sum[0] / weight_sum);
            out[ci + 1] = quantize(sum[1] / weight_sum);
            out[ci + 2] = quantize(sum[2] / weight_sum);
        }
    }

    BgrImage::new(image.width, image.height, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_image_unchanged() {
        let img = BgrImage::filled(8, 6, [30, 60, 90]);
        assert_eq!(bilateral_filter(&img, 9, 20.0, 20.0), img);
    }

    #[test]
    fn test_preserves_strong_edge() {
        // Left half black, right half white
        let mut pixels = Vec::new();
        for _y in 0..8 {
            for x in 0..8 {
                let v = if x < 4 { 0 } else { 255 };
                pixels.extend_from_slice(&[v, v, v]);
            }
        }
        let img = BgrImage::new(8, 8, pixels);
        let out = bilateral_filter(&img, 9, 10.0, 10.0);
        // A 765 color distance gives a negligible range weight
        assert_eq!(out.pixel(3, 4), [0, 0, 0]);
        assert_eq!(out.pixel(4, 4), [255, 255, 255]);
    }

    #[test]
    fn test_smooths_small_noise() {
        let mut pixels = vec![100u8; 7 * 7 * 3];
        let center = (3 * 7 + 3) * 3;
        pixels[center] = 110;
        pixels[center + 1] = 110;
        pixels[center + 2] = 110;
        let img = BgrImage::new(7, 7, pixels);
        let out = bilateral_filter(&img, 9, 75.0, 75.0);
        let v = out.pixel(3, 3)[0];
        assert!(v < 110 && v >= 100, "noise should be pulled toward 100, got {}", v);
    }

    #[test]
    fn test_nonpositive_sigma_tolerated() {
        let img = BgrImage::filled(3, 3, [5, 5, 5]);
        assert_eq!(bilateral_filter(&img, 9, 0.0, -4.0), img);
    }

    #[test]
    fn test_empty_image() {
        let img = BgrImage::zeros(0, 0);
        assert!(bilateral_filter(&img, 9, 10.0, 10.0).is_empty());
    }
}
