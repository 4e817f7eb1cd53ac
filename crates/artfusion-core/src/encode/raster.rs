//! Raster encoding for export.
//!
//! PNG, BMP and TIFF are lossless. JPEG is written at a fixed quality of
//! [`JPEG_QUALITY`].

use std::io::Cursor;
use std::path::Path;

use image::codecs::bmp::BmpEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::tiff::TiffEncoder;
use image::{ExtendedColorType, ImageEncoder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::buffer::BgrImage;

/// JPEG quality used on export.
pub const JPEG_QUALITY: u8 = 95;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The file extension names no supported format
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// The encoder rejected the image
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    /// Writing the output file failed
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Output raster format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Png,
    Jpeg,
    Bmp,
    Tiff,
}

impl ImageFormat {
    /// Pick a format from a file extension (case-insensitive, without the dot).
    pub fn from_extension(ext: &str) -> Result<Self, EncodeError> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
            "bmp" => Ok(ImageFormat::Bmp),
            "tif" | "tiff" => Ok(ImageFormat::Tiff),
            other => Err(EncodeError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Pick a format from a path's extension; a path without one defaults to PNG.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EncodeError> {
        match path.as_ref().extension() {
            None => Ok(ImageFormat::Png),
            Some(ext) => Self::from_extension(&ext.to_string_lossy()),
        }
    }
}

/// Encode an image to bytes in the given format.
///
/// # Errors
///
/// Returns `EncodeError::InvalidDimensions` for an empty image and
/// `EncodeError::EncodingFailed` if the encoder fails.
pub fn encode_image(image: &BgrImage, format: ImageFormat) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = image.dimensions();
    encode_rgb(&image.to_rgb(), width, height, format)
}

/// Encode RGB-ordered pixel data.
pub fn encode_rgb(
    pixels: &[u8],
    width: u32,
    height: u32,
    format: ImageFormat,
) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected_len = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    let mut buffer = Cursor::new(Vec::new());
    let color = ExtendedColorType::Rgb8;
    let result = match format {
        ImageFormat::Png => PngEncoder::new(&mut buffer).write_image(pixels, width, height, color),
        ImageFormat::Jpeg => JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY)
            .write_image(pixels, width, height, color),
        ImageFormat::Bmp => BmpEncoder::new(&mut buffer).write_image(pixels, width, height, color),
        ImageFormat::Tiff => {
            TiffEncoder::new(&mut buffer).write_image(pixels, width, height, color)
        }
    };
    result.map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode by the path's extension and write the file.
pub fn save_image(path: impl AsRef<Path>, image: &BgrImage) -> Result<(), EncodeError> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path)?;
    let bytes = encode_image(image, format)?;
    std::fs::write(path, bytes)
        .map_err(|e| EncodeError::IoError(format!("{}: {}", path.display(), e)))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::decode::decode_image;
    use proptest::prelude::*;

    proptest! {
        /// Property: lossless formats reproduce every pixel.
        #[test]
        fn prop_png_lossless(
            (width, height, pixels) in (1u32..=12, 1u32..=12).prop_flat_map(|(w, h)| {
                let size = (w * h * 3) as usize;
                (Just(w), Just(h), prop::collection::vec(any::<u8>(), size..=size))
            })
        ) {
            let img = BgrImage::new(width, height, pixels);
            let bytes = encode_image(&img, ImageFormat::Png).unwrap();
            prop_assert_eq!(decode_image(&bytes).unwrap(), img);
        }

        /// Property: JPEG output always begins with SOI and ends with EOI.
        #[test]
        fn prop_jpeg_markers((width, height) in (1u32..=40, 1u32..=40)) {
            let img = BgrImage::filled(width, height, [128, 128, 128]);
            let bytes = encode_image(&img, ImageFormat::Jpeg).unwrap();
            prop_assert_eq!(&bytes[0..2], &[0xFF, 0xD8]);
            prop_assert_eq!(&bytes[bytes.len() - 2..], &[0xFF, 0xD9]);
        }
    }
}
