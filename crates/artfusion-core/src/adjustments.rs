//! Tonal adjustment.
//!
//! ## Stage Order
//! 1. Contrast and brightness (`x * contrast + brightness / 255`), clamped
//! 2. Saturation scale and hue rotation in HSV, S and V clamped
//! 3. Gamma (`x ^ (1 / gamma)`)
//!
//! The order is fixed. Each stage clamps its output before the next one runs.

use crate::buffer::{quantize, BgrImage};
use crate::color::{bgr_to_hsv, hsv_to_bgr};
use crate::AdjustParams;

/// Smallest gamma used when reciprocating.
const MIN_GAMMA: f32 = 1e-6;

/// Floor applied before the gamma power so `0 ^ k` never occurs.
const MIN_GAMMA_BASE: f32 = 1e-8;

/// Apply brightness, contrast, saturation, hue and gamma to an image.
///
/// # Arguments
/// * `image` - Source image (not modified)
/// * `params` - Adjustment values; see [`AdjustParams`] for ranges
///
/// # Example
/// ```
/// use artfusion_core::{adjust, AdjustParams, BgrImage};
///
/// let img = BgrImage::filled(2, 2, [40, 80, 120]);
/// let mut params = AdjustParams::default();
/// params.brightness = 20.0;
/// let brighter = adjust(&img, &params);
/// ```
pub fn adjust(image: &BgrImage, params: &AdjustParams) -> BgrImage {
    let inv_gamma = 1.0 / params.gamma.max(MIN_GAMMA);
    let offset = params.brightness / 255.0;
    let hue_shift = params.hue / 2.0;

    image.map_pixels(|[b, g, r]| {
        let (b, g, r) = (
            apply_contrast_brightness(b, params.contrast, offset),
            apply_contrast_brightness(g, params.contrast, offset),
            apply_contrast_brightness(r, params.contrast, offset),
        );

        let (b, g, r) = apply_hsv(b, g, r, params.saturation, hue_shift);

        [
            quantize(apply_gamma(b, inv_gamma) * 255.0),
            quantize(apply_gamma(g, inv_gamma) * 255.0),
            quantize(apply_gamma(r, inv_gamma) * 255.0),
        ]
    })
}

/// Returns the sample in 0-255 float space after `x * contrast + offset`.
#[inline]
fn apply_contrast_brightness(sample: u8, contrast: f32, offset: f32) -> f32 {
    let x = sample as f32 / 255.0;
    (x * contrast + offset).clamp(0.0, 1.0) * 255.0
}

/// Scale saturation and rotate hue. Input and output are 0-255 floats;
/// output is renormalized to 0-1.
#[inline]
fn apply_hsv(b: f32, g: f32, r: f32, saturation: f32, hue_shift: f32) -> (f32, f32, f32) {
    let mut hsv = bgr_to_hsv(b, g, r);
    hsv.s = (hsv.s * saturation).clamp(0.0, 255.0);
    hsv.h = (hsv.h + hue_shift).rem_euclid(180.0);
    hsv.v = hsv.v.clamp(0.0, 255.0);

    let (b, g, r) = hsv_to_bgr(hsv);
    (
        (b / 255.0).clamp(0.0, 1.0),
        (g / 255.0).clamp(0.0, 1.0),
        (r / 255.0).clamp(0.0, 1.0),
    )
}

#[inline]
fn apply_gamma(x: f32, inv_gamma: f32) -> f32 {
    if inv_gamma == 1.0 {
        return x;
    }
    x.max(MIN_GAMMA_BASE).powf(inv_gamma)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: identity parameters change no channel by more than 1.
        #[test]
        fn prop_identity_within_rounding(b in any::<u8>(), g in any::<u8>(), r in any::<u8>()) {
            let img = BgrImage::new(1, 1, vec![b, g, r]);
            let out = adjust(&img, &AdjustParams::default()).pixel(0, 0);
            for (o, i) in out.iter().zip([b, g, r].iter()) {
                prop_assert!((*o as i32 - *i as i32).abs() <= 1);
            }
        }

        /// Property: output dimensions always match the input.
        #[test]
        fn prop_shape_preserved(
            w in 1u32..8,
            h in 1u32..8,
            brightness in -100.0f32..100.0,
            contrast in 0.1f32..3.0,
            hue in -180.0f32..180.0,
        ) {
            let img = BgrImage::filled(w, h, [90, 140, 30]);
            let params = AdjustParams { brightness, contrast, hue, ..AdjustParams::default() };
            prop_assert_eq!(adjust(&img, &params).dimensions(), (w, h));
        }
    }
}
