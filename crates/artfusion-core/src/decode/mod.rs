//! Raster decoding for ArtFusion.
//!
//! This module provides:
//! - Decoding PNG, JPEG, BMP and TIFF into [`BgrImage`](crate::BgrImage)
//! - EXIF orientation correction on decode
//! - Resizing, used when two-image operations receive mismatched sizes
//!
//! All operations are synchronous and single-threaded.
//!
//! # Examples
//!
//! ```ignore
//! use artfusion_core::decode::load_image;
//!
//! let image = load_image("photo.jpg").unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod raster;
mod resize;
mod types;

pub use raster::{decode_image, decode_image_no_orientation, get_orientation, load_image};
pub use resize::{resize, resize_to_match};
pub use types::{DecodeError, FilterType, Orientation};
