//! Otsu mask and mask-compositing WASM bindings.

use crate::types::JsImage;
use artfusion_core::Mask;
use wasm_bindgen::prelude::*;

/// Single-channel 8-bit mask for JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct JsMask {
    width: u32,
    height: u32,
    values: Vec<u8>,
}

#[wasm_bindgen]
impl JsMask {
    /// Create a mask from one byte per pixel.
    ///
    /// Throws if the buffer length is not `width * height`.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, values: Vec<u8>) -> Result<JsMask, JsValue> {
        Self::try_new(width, height, values).map_err(|e| JsValue::from_str(&e))
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Mask values as Uint8Array (a copy).
    pub fn values(&self) -> Vec<u8> {
        self.values.clone()
    }

    /// The mask as a gray three-channel image, for display.
    pub fn to_image(&self) -> JsImage {
        JsImage::from_core(self.to_core().to_bgr())
    }

    pub fn free(self) {}
}

impl JsMask {
    pub(crate) fn try_new(width: u32, height: u32, values: Vec<u8>) -> Result<JsMask, String> {
        let expected = width as usize * height as usize;
        if values.len() != expected {
            return Err(format!(
                "Invalid mask data: expected {} bytes for {}x{} mask, got {}",
                expected,
                width,
                height,
                values.len()
            ));
        }
        Ok(JsMask {
            width,
            height,
            values,
        })
    }

    pub(crate) fn from_core(mask: Mask) -> Self {
        Self {
            width: mask.width,
            height: mask.height,
            values: mask.into_values(),
        }
    }

    pub(crate) fn to_core(&self) -> Mask {
        Mask::new(self.width, self.height, self.values.clone())
    }
}

/// Otsu threshold of the image's BT.601 gray histogram.
#[wasm_bindgen]
pub fn otsu_threshold(image: &JsImage) -> u8 {
    let gray = artfusion_core::luminance::to_gray(&image.to_core());
    artfusion_core::otsu_threshold(&artfusion_core::gray_histogram(&gray))
}

/// Foreground mask by Otsu threshold, optionally inverted and feathered.
#[wasm_bindgen]
pub fn otsu_mask(image: &JsImage, invert: bool, feather: i32) -> JsMask {
    JsMask::from_core(artfusion_core::otsu_mask(&image.to_core(), invert, feather))
}

/// Composite `other` over `base` weighted by `mask`.
///
/// `other` is resized to `base` when needed.
///
/// # Errors
///
/// Throws if the mask size differs from `base`.
#[wasm_bindgen]
pub fn composite_by_mask(base: &JsImage, other: &JsImage, mask: &JsMask) -> Result<JsImage, JsValue> {
    composite(base, other, mask).map_err(|e| JsValue::from_str(&e))
}

fn composite(base: &JsImage, other: &JsImage, mask: &JsMask) -> Result<JsImage, String> {
    if (mask.width, mask.height) != (base.width(), base.height()) {
        return Err(format!(
            "Mask is {}x{} but the base image is {}x{}",
            mask.width,
            mask.height,
            base.width(),
            base.height()
        ));
    }
    Ok(JsImage::from_core(artfusion_core::composite_by_mask(
        &base.to_core(),
        &other.to_core(),
        &mask.to_core(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use artfusion_core::BgrImage;

    /// Left half dark, right half bright.
    fn split_image() -> JsImage {
        let mut pixels = Vec::new();
        for _y in 0..4 {
            for x in 0..8 {
                let v = if x < 4 { 20 } else { 220 };
                pixels.extend_from_slice(&[v, v, v]);
            }
        }
        JsImage::try_new(8, 4, pixels).unwrap()
    }

    #[test]
    fn test_js_mask_rejects_wrong_length() {
        assert!(JsMask::try_new(3, 3, vec![0; 8]).is_err());
        assert!(JsMask::try_new(3, 3, vec![0; 9]).is_ok());
    }

    #[test]
    fn test_otsu_threshold_between_levels() {
        let t = otsu_threshold(&split_image());
        assert!((20..220).contains(&t), "threshold {}", t);
    }

    #[test]
    fn test_otsu_mask_hard_edges() {
        let mask = otsu_mask(&split_image(), false, 0);
        let values = mask.values();
        assert_eq!(values[0], 0);
        assert_eq!(values[7], 255);

        let inverted = otsu_mask(&split_image(), true, 0).values();
        assert_eq!(inverted[0], 255);
        assert_eq!(inverted[7], 0);
    }

    #[test]
    fn test_mask_to_image() {
        let mask = JsMask::try_new(2, 1, vec![0, 255]).unwrap();
        assert_eq!(mask.to_image().pixels(), vec![0, 0, 0, 255, 255, 255]);
    }

    #[test]
    fn test_composite_selects_by_mask() {
        let base = JsImage::from_core(BgrImage::filled(2, 1, [0, 0, 0]));
        let other = JsImage::from_core(BgrImage::filled(2, 1, [200, 100, 50]));
        let mask = JsMask::try_new(2, 1, vec![0, 255]).unwrap();

        let out = composite(&base, &other, &mask).unwrap();
        assert_eq!(out.pixels(), vec![0, 0, 0, 200, 100, 50]);
    }

    #[test]
    fn test_composite_rejects_mask_size() {
        let base = JsImage::from_core(BgrImage::zeros(2, 2));
        let mask = JsMask::try_new(1, 1, vec![0]).unwrap();
        assert!(composite(&base, &base, &mask).is_err());
    }
}
