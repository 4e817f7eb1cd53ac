//! ArtFusion WASM - WebAssembly bindings for the ArtFusion image engine
//!
//! This crate exposes artfusion-core to JavaScript/TypeScript. Images cross
//! the boundary as [`JsImage`] (8-bit BGR); canvas `ImageData` converts with
//! [`JsImage::from_rgba`] and [`JsImage::to_rgba`].
//!
//! # Module Structure
//!
//! - `types` - JsImage and parameter conversion helpers
//! - `adjustments` - Brightness, contrast, saturation, hue and gamma
//! - `filters` - Grayscale, sepia, blur, sharpen, edges and cartoon
//! - `effects` - Vignette, glow, blend modes and color transfer
//! - `mask` - Otsu masks and mask compositing
//! - `session` - Two-slot editing session with undo/redo
//! - `decode` / `encode` - Raster file I/O
//! - `logger` - `log` records forwarded to the browser console
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, sepia, encode_image } from '@artfusion/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! const toned = sepia(image, 0.8);
//! const png = encode_image(toned, 'png');
//! ```

use wasm_bindgen::prelude::*;

mod adjustments;
mod decode;
mod effects;
mod encode;
mod filters;
mod logger;
mod mask;
mod session;
mod types;

// Re-export public types
pub use adjustments::{adjust, AdjustParams};
pub use decode::{decode_image, decode_image_no_orientation, get_orientation, resize};
pub use effects::{blend, blend_modes, glow, reinhard_color_transfer, vignette};
pub use encode::{encode_image, encode_png};
pub use filters::{apply_filter, blur, cartoon, edges, grayscale, sepia, sharpen};
pub use logger::set_log_level;
pub use mask::{composite_by_mask, otsu_mask, otsu_threshold, JsMask};
pub use session::JsSession;
pub use types::JsImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    logger::install(logger::DEFAULT_LEVEL);
    log::info!("artfusion-wasm {} ready", version());
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
