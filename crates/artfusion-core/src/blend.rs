//! Two-layer blending.
//!
//! The top layer `b` is resized to the base layer `a` when their sizes
//! differ. Blending runs in [0, 1] float space; the result is clamped and
//! rescaled to 8 bits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::buffer::{quantize, BgrImage};
use crate::decode::resize_to_match;

/// Blend mode for [`blend`].
///
/// Only `Normal` and `Add` use the opacity `alpha`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendMode {
    /// `a * (1 - α) + b * α`
    #[default]
    Normal,
    /// `a * b`
    Multiply,
    /// `1 - (1 - a)(1 - b)`
    Screen,
    /// Multiply in the shadows of `a`, screen in its highlights.
    Overlay,
    /// `min(a, b)`
    Darken,
    /// `max(a, b)`
    Lighten,
    /// `a + b * α`
    Add,
}

impl BlendMode {
    pub const ALL: [BlendMode; 7] = [
        BlendMode::Normal,
        BlendMode::Multiply,
        BlendMode::Screen,
        BlendMode::Overlay,
        BlendMode::Darken,
        BlendMode::Lighten,
        BlendMode::Add,
    ];

    /// Lowercase name as shown in the mode picker.
    pub fn name(self) -> &'static str {
        match self {
            BlendMode::Normal => "normal",
            BlendMode::Multiply => "multiply",
            BlendMode::Screen => "screen",
            BlendMode::Overlay => "overlay",
            BlendMode::Darken => "darken",
            BlendMode::Lighten => "lighten",
            BlendMode::Add => "add",
        }
    }

    /// Parse a mode name, falling back to `Normal` for unknown names.
    pub fn parse_or_normal(name: &str) -> BlendMode {
        name.parse().unwrap_or_else(|_| {
            log::debug!("unknown blend mode {:?}, using normal", name);
            BlendMode::Normal
        })
    }

    #[inline]
    fn apply(self, a: f32, b: f32, alpha: f32) -> f32 {
        match self {
            BlendMode::Normal => a * (1.0 - alpha) + b * alpha,
            BlendMode::Multiply => a * b,
            BlendMode::Screen => 1.0 - (1.0 - a) * (1.0 - b),
            BlendMode::Overlay => {
                if a <= 0.5 {
                    2.0 * a * b
                } else {
                    1.0 - 2.0 * (1.0 - a) * (1.0 - b)
                }
            }
            BlendMode::Darken => a.min(b),
            BlendMode::Lighten => a.max(b),
            BlendMode::Add => a + b * alpha,
        }
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognized blend mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown blend mode: {0}")]
pub struct UnknownBlendMode(pub String);

impl FromStr for BlendMode {
    type Err = UnknownBlendMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        BlendMode::ALL
            .into_iter()
            .find(|mode| mode.name() == lower)
            .ok_or_else(|| UnknownBlendMode(s.to_string()))
    }
}

/// Blend `b` over `a`.
///
/// The result has `a`'s dimensions.
pub fn blend(a: &BgrImage, b: &BgrImage, mode: BlendMode, alpha: f32) -> BgrImage {
    let b = resize_to_match(b, a.width, a.height);
    let out = a
        .pixels()
        .iter()
        .zip(b.pixels())
        .map(|(&x, &y)| {
            let v = mode.apply(x as f32 / 255.0, y as f32 / 255.0, alpha);
            quantize(v.clamp(0.0, 1.0) * 255.0)
        })
        .collect();
    BgrImage::new(a.width, a.height, out)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_pair() -> impl Strategy<Value = (BgrImage, BgrImage)> {
        (1u32..6, 1u32..6).prop_flat_map(|(w, h)| {
            let size = (w * h * 3) as usize;
            (
                prop::collection::vec(any::<u8>(), size..=size),
                prop::collection::vec(any::<u8>(), size..=size),
            )
                .prop_map(move |(p, q)| (BgrImage::new(w, h, p), BgrImage::new(w, h, q)))
        })
    }

    fn arb_image() -> impl Strategy<Value = BgrImage> {
        (1u32..6, 1u32..6).prop_flat_map(|(w, h)| {
            let size = (w * h * 3) as usize;
            prop::collection::vec(any::<u8>(), size..=size)
                .prop_map(move |p| BgrImage::new(w, h, p))
        })
    }

    proptest! {
        /// Property: with different sizes, swapping the layers matches once the
        /// second image is resized to the first.
        #[test]
        fn prop_symmetric_modes_resized(a in arb_image(), b in arb_image(), alpha in 0.0f32..=1.0) {
            let b_resized = resize_to_match(&b, a.width, a.height);
            for mode in [BlendMode::Multiply, BlendMode::Screen, BlendMode::Darken, BlendMode::Lighten] {
                prop_assert_eq!(blend(&a, &b, mode, alpha), blend(&b_resized, &a, mode, alpha));
            }
        }

        /// Property: the commutative modes give the same result either way round.
        #[test]
        fn prop_symmetric_modes((a, b) in arb_pair(), alpha in 0.0f32..=1.0) {
            for mode in [BlendMode::Multiply, BlendMode::Screen, BlendMode::Darken, BlendMode::Lighten] {
                prop_assert_eq!(blend(&a, &b, mode, alpha), blend(&b, &a, mode, alpha));
            }
        }

        /// Property: normal with alpha 0 returns the base and alpha 1 the top layer.
        #[test]
        fn prop_normal_endpoints((a, b) in arb_pair()) {
            prop_assert_eq!(blend(&a, &b, BlendMode::Normal, 0.0), a.clone());
            prop_assert_eq!(blend(&a, &b, BlendMode::Normal, 1.0), b);
        }

        /// Property: output always has the base dimensions.
        #[test]
        fn prop_base_dimensions(w in 1u32..8, h in 1u32..8, bw in 1u32..8, bh in 1u32..8) {
            let a = BgrImage::filled(w, h, [10, 20, 30]);
            let b = BgrImage::filled(bw, bh, [200, 100, 0]);
            for mode in BlendMode::ALL {
                prop_assert_eq!(blend(&a, &b, mode, 0.5).dimensions(), (w, h));
            }
        }
    }
}
