//! Threshold masks and mask-weighted compositing.
//!
//! [`otsu_mask`] separates foreground from background by an automatic gray
//! threshold; [`composite_by_mask`] uses any mask as a per-pixel opacity to
//! bring a second image into the first.

pub mod composite;
pub mod otsu;

pub use composite::composite_by_mask;
pub use otsu::{otsu_mask, otsu_threshold};
