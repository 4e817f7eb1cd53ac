//! Mask-weighted compositing of two images.

use crate::buffer::{quantize, BgrImage, Mask};
use crate::decode::resize_to_match;

/// Composite `other` over `base`, weighted per pixel by `mask / 255`.
///
/// `other` is resized to `base` when their sizes differ.
///
/// # Panics
/// Panics if `mask` does not have `base`'s dimensions.
pub fn composite_by_mask(base: &BgrImage, other: &BgrImage, mask: &Mask) -> BgrImage {
    assert_eq!(
        mask.dimensions(),
        base.dimensions(),
        "mask dimensions must match the base image"
    );
    let other = resize_to_match(other, base.width, base.height);

    let mut out = Vec::with_capacity(base.pixels().len());
    for ((bp, op), &m) in base
        .pixels()
        .chunks_exact(3)
        .zip(other.pixels().chunks_exact(3))
        .zip(mask.values())
    {
        let opacity = m as f32 / 255.0;
        for c in 0..3 {
            out.push(quantize(
                bp[c] as f32 * (1.0 - opacity) + op[c] as f32 * opacity,
            ));
        }
    }
    BgrImage::new(base.width, base.height, out)
}
