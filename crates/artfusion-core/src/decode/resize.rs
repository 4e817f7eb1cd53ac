//! Image resizing.
//!
//! Two-image operations resize their second input to the first with
//! [`resize_to_match`], which never fails.

use super::{DecodeError, FilterType};
use crate::buffer::BgrImage;

/// Resize an image to exact dimensions.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if either target dimension is zero.
pub fn resize(
    image: &BgrImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<BgrImage, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidFormat);
    }
    if image.dimensions() == (width, height) {
        return Ok(image.clone());
    }
    if image.is_empty() {
        return Ok(BgrImage::zeros(width, height));
    }

    let resized = image::imageops::resize(
        &image.to_rgb_image(),
        width,
        height,
        filter.to_image_filter(),
    );
    Ok(BgrImage::from_rgb_image(resized))
}

/// Resize `image` to `width x height` with bilinear interpolation.
///
/// Returns a clone when the size already matches. An empty source or target
/// yields a black image of the target size.
pub fn resize_to_match(image: &BgrImage, width: u32, height: u32) -> BgrImage {
    if image.dimensions() == (width, height) {
        return image.clone();
    }
    log::debug!(
        "resizing {}x{} to {}x{}",
        image.width,
        image.height,
        width,
        height
    );
    resize(image, width, height, FilterType::Bilinear)
        .unwrap_or_else(|_| BgrImage::zeros(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_image(width: u32, height: u32) -> BgrImage {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(128);
                pixels.push(((y * 255) / height.max(1)) as u8);
                pixels.push(((x * 255) / width.max(1)) as u8);
            }
        }
        BgrImage::new(width, height, pixels)
    }

    #[test]
    fn test_resize_basic() {
        let resized = resize(&create_test_image(100, 50), 50, 25, FilterType::Bilinear).unwrap();
        assert_eq!(resized.dimensions(), (50, 25));
        assert_eq!(resized.pixels().len(), 50 * 25 * 3);
    }

    #[test]
    fn test_resize_same_dimensions() {
        let img = create_test_image(10, 5);
        assert_eq!(resize(&img, 10, 5, FilterType::Lanczos3).unwrap(), img);
    }

    #[test]
    fn test_resize_zero_dimensions_error() {
        let img = create_test_image(10, 5);
        assert!(resize(&img, 0, 5, FilterType::Bilinear).is_err());
        assert!(resize(&img, 5, 0, FilterType::Bilinear).is_err());
    }

    #[test]
    fn test_resize_keeps_channel_order() {
        let img = BgrImage::filled(3, 3, [10, 20, 30]);
        let resized = resize(&img, 6, 2, FilterType::Bilinear).unwrap();
        assert!(resized
            .pixels()
            .chunks_exact(3)
            .all(|px| px == [10, 20, 30]));
    }

    #[test]
    fn test_resize_to_match_same_size_is_clone() {
        let img = create_test_image(4, 4);
        assert_eq!(resize_to_match(&img, 4, 4), img);
    }

    #[test]
    fn test_resize_to_match_upscale() {
        let img = BgrImage::filled(2, 2, [7, 8, 9]);
        let out = resize_to_match(&img, 5, 3);
        assert_eq!(out.dimensions(), (5, 3));
        assert_eq!(out.pixel(4, 2), [7, 8, 9]);
    }

    #[test]
    fn test_resize_to_match_degenerate() {
        let img = create_test_image(4, 4);
        assert_eq!(resize_to_match(&img, 0, 3), BgrImage::zeros(0, 3));
        assert_eq!(resize_to_match(&BgrImage::zeros(0, 0), 2, 2), BgrImage::zeros(2, 2));
    }
}
