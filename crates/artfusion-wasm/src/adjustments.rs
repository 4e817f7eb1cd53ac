//! Tonal adjustment WASM bindings.
//!
//! Wraps [`artfusion_core::AdjustParams`] so the adjustment panel can edit
//! values field by field from TypeScript.

use crate::types::{js_error, JsImage};
use wasm_bindgen::prelude::*;

/// Brightness, contrast, saturation, hue and gamma for JavaScript
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct AdjustParams {
    inner: artfusion_core::AdjustParams,
}

#[wasm_bindgen]
impl AdjustParams {
    /// Create adjustment parameters with identity values
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Brightness offset in 8-bit units (-100 to 100)
    #[wasm_bindgen(getter)]
    pub fn brightness(&self) -> f32 {
        self.inner.brightness
    }

    #[wasm_bindgen(setter)]
    pub fn set_brightness(&mut self, value: f32) {
        self.inner.brightness = value;
    }

    /// Contrast multiplier (0.1 to 3.0)
    #[wasm_bindgen(getter)]
    pub fn contrast(&self) -> f32 {
        self.inner.contrast
    }

    #[wasm_bindgen(setter)]
    pub fn set_contrast(&mut self, value: f32) {
        self.inner.contrast = value;
    }

    /// Saturation multiplier (0.0 to 3.0)
    #[wasm_bindgen(getter)]
    pub fn saturation(&self) -> f32 {
        self.inner.saturation
    }

    #[wasm_bindgen(setter)]
    pub fn set_saturation(&mut self, value: f32) {
        self.inner.saturation = value;
    }

    /// Hue rotation in degrees (-180 to 180)
    #[wasm_bindgen(getter)]
    pub fn hue(&self) -> f32 {
        self.inner.hue
    }

    #[wasm_bindgen(setter)]
    pub fn set_hue(&mut self, value: f32) {
        self.inner.hue = value;
    }

    /// Gamma (0.5 to 2.5)
    #[wasm_bindgen(getter)]
    pub fn gamma(&self) -> f32 {
        self.inner.gamma
    }

    #[wasm_bindgen(setter)]
    pub fn set_gamma(&mut self, value: f32) {
        self.inner.gamma = value;
    }

    /// Check if every value is at its identity default
    pub fn is_identity(&self) -> bool {
        self.inner.is_identity()
    }

    /// Serialize to a plain JS object
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(js_error)
    }

    /// Deserialize from a plain JS object; missing fields keep their defaults
    pub fn from_json(value: JsValue) -> Result<AdjustParams, JsValue> {
        let inner = crate::types::params_from_js(value)?;
        Ok(Self { inner })
    }
}

impl AdjustParams {
    pub(crate) fn inner(&self) -> &artfusion_core::AdjustParams {
        &self.inner
    }
}

/// Apply tonal adjustments and return a new image. The input is untouched.
///
/// # Example (TypeScript)
/// ```typescript
/// const params = new AdjustParams();
/// params.brightness = 20;
/// params.gamma = 1.2;
/// const result = adjust(image, params);
/// ```
#[wasm_bindgen]
pub fn adjust(image: &JsImage, params: &AdjustParams) -> JsImage {
    JsImage::from_core(artfusion_core::adjust(&image.to_core(), params.inner()))
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_from_json_partial_object() {
        let obj = js_sys::Object::new();
        js_sys::Reflect::set(&obj, &"gamma".into(), &JsValue::from_f64(2.0)).unwrap();

        let params = AdjustParams::from_json(obj.into()).unwrap();
        assert_eq!(params.gamma(), 2.0);
        assert_eq!(params.contrast(), 1.0);
    }

    #[wasm_bindgen_test]
    fn test_json_round_trip() {
        let mut params = AdjustParams::new();
        params.set_brightness(12.0);
        let value = params.to_json().unwrap();
        let back = AdjustParams::from_json(value).unwrap();
        assert_eq!(back.brightness(), 12.0);
    }

    #[wasm_bindgen_test]
    fn test_from_json_undefined_is_identity() {
        let params = AdjustParams::from_json(JsValue::UNDEFINED).unwrap();
        assert!(params.is_identity());
    }
}
