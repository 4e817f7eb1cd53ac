//! Image encoding for ArtFusion.
//!
//! Writes [`BgrImage`](crate::BgrImage) values to PNG, JPEG, BMP or TIFF.
//! All operations are synchronous and single-threaded.
//!
//! # Examples
//!
//! ```ignore
//! use artfusion_core::encode::{encode_image, ImageFormat};
//! use artfusion_core::BgrImage;
//!
//! let img = BgrImage::filled(100, 100, [128, 128, 128]);
//! let png = encode_image(&img, ImageFormat::Png).unwrap();
//! println!("Encoded {} bytes", png.len());
//! ```

mod raster;

pub use raster::{encode_image, encode_rgb, save_image, EncodeError, ImageFormat, JPEG_QUALITY};
