//! Stylistic filters.
//!
//! All filters take an image by reference and return a new image of the same
//! size. Out-of-range parameters are coerced, never rejected.

pub mod bilateral;
pub mod canny;
pub mod gaussian;

pub use bilateral::bilateral_filter;
pub use canny::canny;
pub use gaussian::{coerce_kernel_size, gaussian_kernel, kernel_size_for_sigma};

use crate::buffer::{quantize, BgrImage};
use crate::luminance::to_gray;

/// Sigma of the unsharp-mask blur.
pub const SHARPEN_SIGMA: f32 = 2.0;

/// Bilateral window diameter used by [`cartoon`].
pub const CARTOON_DIAMETER: u32 = 9;

/// Sepia matrix rows, applied to the (B, G, R) vector in sample order and
/// producing (B', G', R').
const SEPIA: [[f32; 3]; 3] = [
    [0.272, 0.534, 0.131],
    [0.349, 0.686, 0.168],
    [0.393, 0.769, 0.189],
];

/// BT.601 grayscale replicated into all three channels.
pub fn grayscale(image: &BgrImage) -> BgrImage {
    to_gray(image).to_bgr()
}

/// Sepia tone blended with the original by `strength`.
///
/// `strength = 0` returns the input unchanged and `1` the full sepia tone.
/// Values above 1 extrapolate past the sepia tone and saturate.
pub fn sepia(image: &BgrImage, strength: f32) -> BgrImage {
    image.map_pixels(|px| {
        let [b, g, r] = px.map(|v| v as f32);
        // The toned value truncates toward zero before blending
        let tone = |row: [f32; 3]| {
            (row[0] * b + row[1] * g + row[2] * r)
                .clamp(0.0, 255.0)
                .trunc()
        };
        let mix = |orig: f32, toned: f32| quantize(orig * (1.0 - strength) + toned * strength);
        [
            mix(b, tone(SEPIA[0])),
            mix(g, tone(SEPIA[1])),
            mix(r, tone(SEPIA[2])),
        ]
    })
}

/// Gaussian blur with an explicit odd kernel size and sigma.
///
/// `sigma <= 0` derives sigma from the kernel size.
pub fn gaussian_blur(image: &BgrImage, ksize: usize, sigma: f32) -> BgrImage {
    let out = gaussian::gaussian_blur_u8(
        image.pixels(),
        image.width as usize,
        image.height as usize,
        3,
        ksize,
        sigma,
    );
    BgrImage::new(image.width, image.height, out)
}

/// Gaussian blur with a square kernel of side `k`.
///
/// `k` is coerced to an odd value of at least 1; `k = 1` returns a copy.
pub fn blur(image: &BgrImage, k: i32) -> BgrImage {
    let ksize = coerce_kernel_size(k);
    if ksize as i32 != k {
        log::debug!("blur kernel {} coerced to {}", k, ksize);
    }
    gaussian_blur(image, ksize, 0.0)
}

/// Unsharp mask: `original * (1 + amount) - blurred * amount`.
pub fn sharpen(image: &BgrImage, amount: f32) -> BgrImage {
    let blurred = gaussian::gaussian_blur_f32(
        image.pixels(),
        image.width as usize,
        image.height as usize,
        3,
        kernel_size_for_sigma(SHARPEN_SIGMA),
        SHARPEN_SIGMA,
    );
    let out = image
        .pixels()
        .iter()
        .zip(blurred)
        .map(|(&o, bl)| quantize(o as f32 * (1.0 + amount) - bl * amount))
        .collect();
    BgrImage::new(image.width, image.height, out)
}

/// Canny edge map of the grayscale image, replicated to three channels.
pub fn edges(image: &BgrImage, low: f32, high: f32) -> BgrImage {
    canny(&to_gray(image), low, high).to_bgr()
}

/// Bilateral smoothing with black outlines where Canny finds edges.
///
/// The bilateral filter uses `sigma_color = sigma_space = bilateral`; edges
/// come from the original's grayscale with thresholds
/// `(edges_thresh / 2, edges_thresh)`.
pub fn cartoon(image: &BgrImage, bilateral: f32, edges_thresh: f32) -> BgrImage {
    let smooth = bilateral_filter(image, CARTOON_DIAMETER, bilateral, bilateral);
    let outline = canny(&to_gray(image), edges_thresh / 2.0, edges_thresh);

    let mut out = smooth.into_pixels();
    for (px, &edge) in out.chunks_exact_mut(3).zip(outline.values()) {
        if edge != 0 {
            px.fill(0);
        }
    }
    BgrImage::new(image.width, image.height, out)
}
