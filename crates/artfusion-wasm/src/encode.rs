//! Image encoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { encode_image } from '@artfusion/wasm';
//!
//! const png = encode_image(image, 'png');
//! const jpeg = encode_image(image, 'jpg');
//! ```

use crate::types::{js_error, JsImage};
use artfusion_core::{encode, ImageFormat};
use wasm_bindgen::prelude::*;

/// Encode an image to bytes.
///
/// # Arguments
///
/// * `image` - The image to encode
/// * `format` - File extension naming the format: `png`, `jpg`/`jpeg`, `bmp`, `tif`/`tiff`
///
/// # Errors
///
/// Throws if the format is unknown, the image is empty, or encoding fails.
#[wasm_bindgen]
pub fn encode_image(image: &JsImage, format: &str) -> Result<Vec<u8>, JsValue> {
    let format = ImageFormat::from_extension(format.trim_start_matches('.')).map_err(js_error)?;
    encode::encode_image(&image.to_core(), format).map_err(js_error)
}

/// Encode an image as PNG.
#[wasm_bindgen]
pub fn encode_png(image: &JsImage) -> Result<Vec<u8>, JsValue> {
    encode::encode_image(&image.to_core(), ImageFormat::Png).map_err(js_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> JsImage {
        JsImage::try_new(4, 4, vec![90; 48]).unwrap()
    }

    #[test]
    fn test_encode_png_signature() {
        let bytes = encode_png(&sample()).unwrap();
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_encode_jpeg_by_extension() {
        let bytes = encode_image(&sample(), ".JPG").unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_encode_then_decode() {
        let bytes = encode_image(&sample(), "bmp").unwrap();
        let decoded = crate::decode::decode_image(&bytes).unwrap();
        assert_eq!(decoded, sample());
    }
}
