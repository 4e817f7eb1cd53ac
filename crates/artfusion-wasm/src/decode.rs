//! Image decoding WASM bindings.
//!
//! # Functions
//!
//! - [`decode_image`] - Decode JPEG, PNG, BMP or TIFF bytes with EXIF orientation applied
//! - [`decode_image_no_orientation`] - Decode without touching orientation
//! - [`get_orientation`] - Read the EXIF orientation value (1-8)
//! - [`resize`] - Resize an image to exact dimensions
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, resize } from '@artfusion/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! const small = resize(image, 320, 240, 1); // Bilinear
//! ```

use crate::types::{filter_from_u8, js_error, JsImage};
use artfusion_core::decode;
use wasm_bindgen::prelude::*;

/// Decode an image from bytes, applying EXIF orientation.
///
/// # Errors
///
/// Throws if the bytes are not a supported format or are corrupted.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsImage, JsValue> {
    decode::decode_image(bytes)
        .map(JsImage::from_core)
        .map_err(js_error)
}

/// Decode an image from bytes without applying EXIF orientation.
#[wasm_bindgen]
pub fn decode_image_no_orientation(bytes: &[u8]) -> Result<JsImage, JsValue> {
    decode::decode_image_no_orientation(bytes)
        .map(JsImage::from_core)
        .map_err(js_error)
}

/// EXIF orientation value of the image bytes, 1 when absent.
#[wasm_bindgen]
pub fn get_orientation(bytes: &[u8]) -> u8 {
    decode::get_orientation(bytes) as u8
}

/// Resize an image to exact dimensions.
///
/// # Arguments
///
/// * `image` - The source image
/// * `width` - Target width in pixels
/// * `height` - Target height in pixels
/// * `filter` - 0 = Nearest, 1 = Bilinear, 2 = Lanczos3
///
/// # Errors
///
/// Throws if either target dimension is zero.
#[wasm_bindgen]
pub fn resize(image: &JsImage, width: u32, height: u32, filter: u8) -> Result<JsImage, JsValue> {
    decode::resize(&image.to_core(), width, height, filter_from_u8(filter))
        .map(JsImage::from_core)
        .map_err(js_error)
}
