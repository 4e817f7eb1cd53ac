//! Color space conversions used by the engine.
//!
//! Both conversions work on BGR samples in the 0-255 range and keep their
//! results in `f32` so that chained stages do not accumulate 8-bit
//! quantization error.
//!
//! - [`hsv`]: hue/saturation/value with the 8-bit hue convention (0-180)
//! - [`lab`]: CIE L*a*b* (D65) scaled to the 8-bit Lab convention

pub mod hsv;
pub mod lab;

pub use hsv::{bgr_to_hsv, hsv_to_bgr, Hsv};
pub use lab::{bgr_to_lab, lab_to_bgr, Lab};
