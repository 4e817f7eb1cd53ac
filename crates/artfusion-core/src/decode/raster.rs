//! Raster decoding (PNG, JPEG, BMP, TIFF) with EXIF orientation handling.

use std::io::Cursor;
use std::path::Path;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageReader};

use super::{DecodeError, Orientation};
use crate::buffer::BgrImage;

/// Decode an image from bytes, applying EXIF orientation correction.
///
/// The format is sniffed from the content. Grayscale and alpha images are
/// converted to three channels; alpha is dropped.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format is not recognized and
/// `DecodeError::CorruptedFile` if the data cannot be decoded.
pub fn decode_image(bytes: &[u8]) -> Result<BgrImage, DecodeError> {
    let orientation = extract_orientation(bytes);
    let img = read_dynamic(bytes)?;
    if orientation != Orientation::Normal {
        log::debug!("applying EXIF orientation {:?}", orientation);
    }
    let oriented = apply_orientation(img, orientation);
    Ok(BgrImage::from_rgb_image(oriented.into_rgb8()))
}

/// Decode an image from bytes without applying EXIF orientation.
pub fn decode_image_no_orientation(bytes: &[u8]) -> Result<BgrImage, DecodeError> {
    let img = read_dynamic(bytes)?;
    Ok(BgrImage::from_rgb_image(img.into_rgb8()))
}

/// Read a file and decode it with [`decode_image`].
pub fn load_image(path: impl AsRef<Path>) -> Result<BgrImage, DecodeError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .map_err(|e| DecodeError::IoError(format!("{}: {}", path.display(), e)))?;
    decode_image(&bytes)
}

/// Extract the EXIF orientation value from image bytes.
///
/// Returns `Orientation::Normal` when there is no EXIF data.
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    extract_orientation(bytes)
}

fn read_dynamic(bytes: &[u8]) -> Result<DynamicImage, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::InvalidFormat);
    }
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::IoError(e.to_string()))?;
    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }
    reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))
}

fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);
    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(_) => Orientation::Normal,
    }
}

fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageFormat;

    fn png_bytes(img: DynamicImage) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    fn two_pixel_rgb() -> DynamicImage {
        // Red on the left, green on the right
        let rgb = image::RgbImage::from_raw(2, 1, vec![255, 0, 0, 0, 255, 0]).unwrap();
        DynamicImage::ImageRgb8(rgb)
    }

    #[test]
    fn test_decode_png_to_bgr() {
        let img = decode_image(&png_bytes(two_pixel_rgb())).unwrap();
        assert_eq!(img.dimensions(), (2, 1));
        assert_eq!(img.pixel(0, 0), [0, 0, 255]);
        assert_eq!(img.pixel(1, 0), [0, 255, 0]);
    }

    #[test]
    fn test_decode_gray_png_expands_channels() {
        let gray = image::GrayImage::from_raw(2, 1, vec![10, 200]).unwrap();
        let img = decode_image(&png_bytes(DynamicImage::ImageLuma8(gray))).unwrap();
        assert_eq!(img.pixel(0, 0), [10, 10, 10]);
        assert_eq!(img.pixel(1, 0), [200, 200, 200]);
    }

    #[test]
    fn test_decode_rgba_png_drops_alpha() {
        let rgba = image::RgbaImage::from_raw(1, 1, vec![1, 2, 3, 4]).unwrap();
        let img = decode_image(&png_bytes(DynamicImage::ImageRgba8(rgba))).unwrap();
        assert_eq!(img.pixel(0, 0), [3, 2, 1]);
    }

    #[test]
    fn test_decode_no_orientation_matches_plain_png() {
        let bytes = png_bytes(two_pixel_rgb());
        assert_eq!(
            decode_image_no_orientation(&bytes).unwrap(),
            decode_image(&bytes).unwrap()
        );
    }

    #[test]
    fn test_decode_unknown_format() {
        let result = decode_image(&[0x00, 0x01, 0x02, 0x03]);
        assert!(matches!(result, Err(DecodeError::InvalidFormat)));
    }

    #[test]
    fn test_decode_empty_bytes() {
        assert!(matches!(decode_image(&[]), Err(DecodeError::InvalidFormat)));
    }

    #[test]
    fn test_decode_truncated_png() {
        let bytes = png_bytes(two_pixel_rgb());
        let result = decode_image(&bytes[..bytes.len() / 2]);
        assert!(matches!(result, Err(DecodeError::CorruptedFile(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_image("/nonexistent/artfusion/missing.png");
        assert!(matches!(result, Err(DecodeError::IoError(_))));
    }

    #[test]
    fn test_orientation_without_exif() {
        assert_eq!(get_orientation(&png_bytes(two_pixel_rgb())), Orientation::Normal);
        assert_eq!(get_orientation(&[0x00, 0x01, 0x02]), Orientation::Normal);
    }

    #[test]
    fn test_apply_orientation_rotate90() {
        let result = apply_orientation(two_pixel_rgb(), Orientation::Rotate90CW).into_rgb8();
        assert_eq!(result.dimensions(), (1, 2));
        assert_eq!(result.get_pixel(0, 0).0, [255, 0, 0]);
    }

    #[test]
    fn test_apply_orientation_flip_horizontal() {
        let result = apply_orientation(two_pixel_rgb(), Orientation::FlipHorizontal).into_rgb8();
        assert_eq!(result.get_pixel(0, 0).0, [0, 255, 0]);
        assert_eq!(result.get_pixel(1, 0).0, [255, 0, 0]);
    }

    #[test]
    fn test_apply_orientation_rotate180() {
        let result = apply_orientation(two_pixel_rgb(), Orientation::Rotate180).into_rgb8();
        assert_eq!(result.dimensions(), (2, 1));
        assert_eq!(result.get_pixel(0, 0).0, [0, 255, 0]);
    }
}
