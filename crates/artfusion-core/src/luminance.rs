//! Luma calculation using ITU-R BT.601 coefficients.
//!
//! This is the grayscale conversion used by the grayscale filter, the edge
//! detectors and Otsu thresholding.

use crate::buffer::{BgrImage, Mask};

/// ITU-R BT.601 coefficient for red channel.
pub const LUMA_R: f32 = 0.299;

/// ITU-R BT.601 coefficient for green channel.
pub const LUMA_G: f32 = 0.587;

/// ITU-R BT.601 coefficient for blue channel.
pub const LUMA_B: f32 = 0.114;

/// Calculate luma from normalized RGB values (0.0 to 1.0).
#[inline]
pub fn calculate_luma(r: f32, g: f32, b: f32) -> f32 {
    LUMA_R * r + LUMA_G * g + LUMA_B * b
}

/// Calculate luma from u8 BGR samples, rounded to the nearest value.
#[inline]
pub fn calculate_luma_u8(b: u8, g: u8, r: u8) -> u8 {
    let luma = LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32;
    luma.clamp(0.0, 255.0).round() as u8
}

/// Convert a BGR image to a single-channel luma grid.
pub fn to_gray(image: &BgrImage) -> Mask {
    let values = image
        .pixels()
        .chunks_exact(3)
        .map(|px| calculate_luma_u8(px[0], px[1], px[2]))
        .collect();
    Mask::new(image.width, image.height, values)
}
