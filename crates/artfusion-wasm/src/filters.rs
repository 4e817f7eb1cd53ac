//! Filter WASM bindings.
//!
//! Every function returns a new image of the input's size.

use crate::types::JsImage;
use artfusion_core::session::filter_with_strength;
use artfusion_core::FilterKind;
use wasm_bindgen::prelude::*;

/// BT.601 grayscale, replicated to three channels.
#[wasm_bindgen]
pub fn grayscale(image: &JsImage) -> JsImage {
    JsImage::from_core(artfusion_core::grayscale(&image.to_core()))
}

/// Sepia tone blended with the original by `strength` (0.0 to 1.0).
#[wasm_bindgen]
pub fn sepia(image: &JsImage, strength: f32) -> JsImage {
    JsImage::from_core(artfusion_core::sepia(&image.to_core(), strength))
}

/// Gaussian blur. Even or non-positive kernels are coerced to the next odd size.
#[wasm_bindgen]
pub fn blur(image: &JsImage, kernel: i32) -> JsImage {
    JsImage::from_core(artfusion_core::blur(&image.to_core(), kernel))
}

/// Unsharp mask with the given amount.
#[wasm_bindgen]
pub fn sharpen(image: &JsImage, amount: f32) -> JsImage {
    JsImage::from_core(artfusion_core::sharpen(&image.to_core(), amount))
}

/// Canny edge map with hysteresis thresholds `low` and `high`.
#[wasm_bindgen]
pub fn edges(image: &JsImage, low: f32, high: f32) -> JsImage {
    JsImage::from_core(artfusion_core::edges(&image.to_core(), low, high))
}

/// Bilateral smoothing with dark edge lines.
#[wasm_bindgen]
pub fn cartoon(image: &JsImage, bilateral: f32, edges_thresh: f32) -> JsImage {
    JsImage::from_core(artfusion_core::cartoon(
        &image.to_core(),
        bilateral,
        edges_thresh,
    ))
}

/// Run a filter by name with a single 0.0-1.0 strength, as the filter panel does.
///
/// `kind` is one of `grayscale`, `sepia`, `blur`, `sharpen`, `edges`, `cartoon`.
/// Unknown names fall back to grayscale.
#[wasm_bindgen]
pub fn apply_filter(image: &JsImage, kind: &str, strength: f32) -> JsImage {
    let kind = filter_kind_from_str(kind);
    JsImage::from_core(filter_with_strength(&image.to_core(), kind, strength))
}

pub(crate) fn filter_kind_from_str(name: &str) -> FilterKind {
    match name.trim().to_ascii_lowercase().as_str() {
        "grayscale" => FilterKind::Grayscale,
        "sepia" => FilterKind::Sepia,
        "blur" => FilterKind::Blur,
        "sharpen" => FilterKind::Sharpen,
        "edges" => FilterKind::Edges,
        "cartoon" => FilterKind::Cartoon,
        other => {
            log::debug!("unknown filter {:?}, using grayscale", other);
            FilterKind::Grayscale
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white(width: u32, height: u32) -> JsImage {
        JsImage::try_new(width, height, vec![255; (width * height * 3) as usize]).unwrap()
    }

    #[test]
    fn test_filter_kind_from_str() {
        assert_eq!(filter_kind_from_str("Sepia"), FilterKind::Sepia);
        assert_eq!(filter_kind_from_str(" cartoon "), FilterKind::Cartoon);
        assert_eq!(filter_kind_from_str("posterize"), FilterKind::Grayscale);
    }

    #[test]
    fn test_grayscale_of_white() {
        assert!(grayscale(&white(4, 4)).pixels().iter().all(|&v| v == 255));
    }

    #[test]
    fn test_blur_of_uniform_is_uniform() {
        let image = JsImage::try_new(5, 5, vec![77; 75]).unwrap();
        assert_eq!(blur(&image, 4), image);
    }

    #[test]
    fn test_edges_of_uniform_is_black() {
        assert!(edges(&white(6, 6), 50.0, 150.0)
            .pixels()
            .iter()
            .all(|&v| v == 0));
    }

    #[test]
    fn test_apply_filter_preserves_shape() {
        let image = white(7, 3);
        for kind in ["grayscale", "sepia", "blur", "sharpen", "edges", "cartoon"] {
            let out = apply_filter(&image, kind, 0.5);
            assert_eq!((out.width(), out.height()), (7, 3), "{}", kind);
        }
    }
}
