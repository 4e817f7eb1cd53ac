//! ArtFusion Core - Image operations engine
//!
//! This crate provides the image operations behind ArtFusion: tonal
//! adjustment, stylistic filters, lighting effects, blending, Otsu
//! compositing and Reinhard color transfer, plus the raster I/O boundary and
//! a headless two-slot editing session.
//!
//! Every engine function borrows its inputs and returns a new [`BgrImage`]
//! with the dimensions of its primary input.

pub mod adjustments;
pub mod blend;
pub mod buffer;
pub mod color;
pub mod decode;
pub mod encode;
pub mod filters;
pub mod fx;
pub mod histogram;
pub mod luminance;
pub mod mask;
pub mod session;
pub mod transfer;

pub use adjustments::adjust;
pub use blend::{blend, BlendMode};
pub use buffer::{BgrImage, Mask};
pub use decode::{decode_image, load_image, resize_to_match, DecodeError};
pub use encode::{encode_image, save_image, EncodeError, ImageFormat};
pub use filters::{blur, cartoon, edges, gaussian_blur, grayscale, sepia, sharpen};
pub use fx::{glow, vignette};
pub use histogram::gray_histogram;
pub use mask::{composite_by_mask, otsu_mask, otsu_threshold};
pub use session::{Session, SessionError};
pub use transfer::{lab_statistics, reinhard_color_transfer, LabStats};

/// Tonal adjustment parameters
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AdjustParams {
    /// Offset in 8-bit units (panel range -100 to 100)
    pub brightness: f32,
    /// Multiplier around black (panel range 0.1 to 3.0)
    pub contrast: f32,
    /// Saturation multiplier (panel range 0.0 to 3.0)
    pub saturation: f32,
    /// Hue rotation in degrees (panel range -180 to 180)
    pub hue: f32,
    /// Gamma (panel range 0.5 to 2.5)
    pub gamma: f32,
}

impl Default for AdjustParams {
    fn default() -> Self {
        Self {
            brightness: 0.0,
            contrast: 1.0,
            saturation: 1.0,
            hue: 0.0,
            gamma: 1.0,
        }
    }
}

impl AdjustParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all values are at their defaults
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}

/// Lighting effect parameters
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FxParams {
    /// Vignette strength (0.0 to 1.0); 0 skips the vignette
    pub vignette: f32,
    /// Glow amount (0.0 to 2.0); 0 skips the glow
    pub glow: f32,
    /// Glow blur kernel size
    pub glow_kernel: i32,
}

impl Default for FxParams {
    fn default() -> Self {
        Self {
            vignette: 0.6,
            glow: 0.6,
            glow_kernel: fx::DEFAULT_GLOW_KERNEL,
        }
    }
}

/// Blend parameters
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BlendParams {
    pub mode: BlendMode,
    /// Opacity of the top layer (0.0 to 1.0)
    pub alpha: f32,
}

impl Default for BlendParams {
    fn default() -> Self {
        Self {
            mode: BlendMode::Normal,
            alpha: 0.5,
        }
    }
}

/// Otsu composite parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OtsuParams {
    /// Swap foreground and background
    pub invert: bool,
    /// Mask blur kernel in pixels (panel range 0 to 51); 0 keeps hard edges
    pub feather: i32,
}

impl Default for OtsuParams {
    fn default() -> Self {
        Self {
            invert: false,
            feather: 7,
        }
    }
}

/// Filter selector for the single-strength filter panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    #[default]
    Grayscale,
    Sepia,
    Blur,
    Sharpen,
    Edges,
    Cartoon,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjust_params_default() {
        let params = AdjustParams::new();
        assert!(params.is_identity());
        assert_eq!(params.contrast, 1.0);
        assert_eq!(params.gamma, 1.0);
    }

    #[test]
    fn test_adjust_params_not_default() {
        let mut params = AdjustParams::new();
        params.hue = 30.0;
        assert!(!params.is_identity());
    }

    #[test]
    fn test_panel_defaults() {
        let fx = FxParams::default();
        assert_eq!((fx.vignette, fx.glow, fx.glow_kernel), (0.6, 0.6, 21));

        let blend = BlendParams::default();
        assert_eq!(blend.mode, BlendMode::Normal);
        assert_eq!(blend.alpha, 0.5);

        assert_eq!(OtsuParams::default(), OtsuParams { invert: false, feather: 7 });
        assert_eq!(FilterKind::default(), FilterKind::Grayscale);
    }

    #[test]
    fn test_white_image_scenario() {
        let white = BgrImage::filled(4, 4, [255, 255, 255]);
        assert_eq!(grayscale(&white), white);
        assert_eq!(sepia(&white, 0.0), white);
        assert_eq!(blur(&white, 1), white);
    }
}
