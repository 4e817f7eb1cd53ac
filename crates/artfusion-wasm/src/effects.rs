//! Lighting, blending and color transfer WASM bindings.

use crate::types::JsImage;
use artfusion_core::BlendMode;
use wasm_bindgen::prelude::*;

/// Darken toward the corners. `strength` 0 leaves the image unchanged.
#[wasm_bindgen]
pub fn vignette(image: &JsImage, strength: f32) -> JsImage {
    JsImage::from_core(artfusion_core::vignette(&image.to_core(), strength))
}

/// Add a blurred copy of the image on top of itself.
///
/// `blur_kernel` defaults to 21 when omitted.
#[wasm_bindgen]
pub fn glow(image: &JsImage, amount: f32, blur_kernel: Option<i32>) -> JsImage {
    let kernel = blur_kernel.unwrap_or(artfusion_core::fx::DEFAULT_GLOW_KERNEL);
    JsImage::from_core(artfusion_core::glow(&image.to_core(), amount, kernel))
}

/// Blend `b` over `a` with the named mode.
///
/// `b` is resized to `a` when the sizes differ. Unknown mode names blend as
/// `normal`.
#[wasm_bindgen]
pub fn blend(a: &JsImage, b: &JsImage, mode: &str, alpha: f32) -> JsImage {
    let mode = BlendMode::parse_or_normal(mode);
    JsImage::from_core(artfusion_core::blend(&a.to_core(), &b.to_core(), mode, alpha))
}

/// Names of the supported blend modes, in picker order.
#[wasm_bindgen]
pub fn blend_modes() -> Vec<String> {
    BlendMode::ALL.iter().map(|m| m.name().to_string()).collect()
}

/// Reinhard color transfer: recolor `source` with the Lab statistics of `target`.
#[wasm_bindgen]
pub fn reinhard_color_transfer(source: &JsImage, target: &JsImage) -> JsImage {
    JsImage::from_core(artfusion_core::reinhard_color_transfer(
        &source.to_core(),
        &target.to_core(),
    ))
}
