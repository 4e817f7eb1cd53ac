//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core ArtFusion
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use artfusion_core::decode::FilterType;
use artfusion_core::BgrImage;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

/// An 8-bit BGR image for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. Calling `pixels()` or `to_rgba()`
/// copies it out to JavaScript memory.
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct JsImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsImage {
    /// Create an image from BGR pixel data (3 bytes per pixel, row-major).
    ///
    /// Throws if the buffer length is not `width * height * 3`.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsImage, JsValue> {
        Self::try_new(width, height, pixels).map_err(|e| JsValue::from_str(&e))
    }

    /// Create an image from canvas `ImageData` (RGBA). Alpha is dropped.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<JsImage, JsValue> {
        Self::try_from_rgba(width, height, rgba).map_err(|e| JsValue::from_str(&e))
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 3)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns BGR pixel data as Uint8Array (a copy).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Returns opaque RGBA data ready for `new ImageData(...)`.
    pub fn to_rgba(&self) -> js_sys::Uint8ClampedArray {
        let rgba = self.rgba_bytes();
        let array = js_sys::Uint8ClampedArray::new_with_length(rgba.len() as u32);
        array.copy_from(&rgba);
        array
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {}
}

impl JsImage {
    pub(crate) fn try_new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsImage, String> {
        let expected = width as usize * height as usize * 3;
        if pixels.len() != expected {
            return Err(format!(
                "Invalid pixel data: expected {} bytes for {}x{} BGR image, got {}",
                expected,
                width,
                height,
                pixels.len()
            ));
        }
        Ok(JsImage {
            width,
            height,
            pixels,
        })
    }

    pub(crate) fn try_from_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<JsImage, String> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(format!(
                "Invalid RGBA data: expected {} bytes for {}x{} image, got {}",
                expected,
                width,
                height,
                rgba.len()
            ));
        }
        let mut pixels = Vec::with_capacity(width as usize * height as usize * 3);
        for px in rgba.chunks_exact(4) {
            pixels.extend_from_slice(&[px[2], px[1], px[0]]);
        }
        Ok(JsImage {
            width,
            height,
            pixels,
        })
    }

    pub(crate) fn rgba_bytes(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.pixels.len() / 3 * 4);
        for px in self.pixels.chunks_exact(3) {
            rgba.extend_from_slice(&[px[2], px[1], px[0], 255]);
        }
        rgba
    }

    /// Wrap a core image.
    pub(crate) fn from_core(img: BgrImage) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.into_pixels(),
        }
    }

    /// Copy into a core image. The length was checked on construction.
    pub(crate) fn to_core(&self) -> BgrImage {
        BgrImage::new(self.width, self.height, self.pixels.clone())
    }
}

/// Convert a u8 filter type value to the core FilterType enum.
///
/// Values:
/// - 0 = Nearest
/// - 1 = Bilinear
/// - 2 = Lanczos3
///
/// Any other value defaults to Bilinear.
pub(crate) fn filter_from_u8(value: u8) -> FilterType {
    match value {
        0 => FilterType::Nearest,
        2 => FilterType::Lanczos3,
        _ => FilterType::Bilinear,
    }
}

/// Read a parameter object. `undefined` and `null` give the defaults, and
/// missing fields take their default values.
pub(crate) fn params_from_js<T>(value: JsValue) -> Result<T, JsValue>
where
    T: DeserializeOwned + Default,
{
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert any displayable error into a thrown JS string.
pub(crate) fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}
