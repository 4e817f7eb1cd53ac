//! Two-slot editing session for JavaScript.
//!
//! Wraps [`artfusion_core::Session`]: one image per slot, one active slot,
//! and a separate undo/redo history per slot. Every `apply_*` call commits
//! its result and records an undo snapshot.
//!
//! # Example (TypeScript)
//! ```typescript
//! const session = new JsSession();
//! session.load(0, decode_image(bytesA));
//! session.load(1, decode_image(bytesB));
//!
//! session.apply_filter('sepia', 0.8);
//! session.apply_blend('overlay', 0.5);
//! session.undo();
//! const shown = session.active_image();
//! ```

use crate::adjustments::AdjustParams;
use crate::filters::filter_kind_from_str;
use crate::types::{js_error, params_from_js, JsImage};
use artfusion_core::session::{SnapshotHistory, SLOT_COUNT};
use artfusion_core::{BlendMode, FxParams, OtsuParams, Session};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct JsSession {
    inner: Session,
}

#[wasm_bindgen]
impl JsSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of image slots.
    #[wasm_bindgen(getter)]
    pub fn slot_count(&self) -> usize {
        SLOT_COUNT
    }

    /// Index of the active slot.
    #[wasm_bindgen(getter)]
    pub fn active(&self) -> usize {
        self.inner.active()
    }

    pub fn set_active(&mut self, slot: usize) -> Result<(), JsValue> {
        self.inner.set_active(slot).map_err(js_error)
    }

    /// Load an image into a slot, discarding that slot's history.
    pub fn load(&mut self, slot: usize, image: &JsImage) -> Result<(), JsValue> {
        self.inner.load(slot, image.to_core()).map_err(js_error)
    }

    /// Current image in `slot`, or `undefined` when empty or out of range.
    pub fn image(&self, slot: usize) -> Option<JsImage> {
        self.inner
            .slot(slot)
            .ok()
            .and_then(|s| s.image())
            .cloned()
            .map(JsImage::from_core)
    }

    /// Current image in the active slot.
    pub fn active_image(&self) -> Option<JsImage> {
        self.inner.active_image().cloned().map(JsImage::from_core)
    }

    pub fn can_undo(&self) -> bool {
        self.active_history(|h| h.can_undo())
    }

    pub fn can_redo(&self) -> bool {
        self.active_history(|h| h.can_redo())
    }

    /// Snapshot the active image onto its undo stack.
    pub fn push_state(&mut self) {
        self.inner.push_state();
    }

    /// Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.inner.undo()
    }

    /// Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.inner.redo()
    }

    /// Adjusted copy of the active base, without committing it.
    pub fn preview_adjust(&self, params: &AdjustParams) -> Option<JsImage> {
        self.inner
            .preview_adjust(params.inner())
            .map(JsImage::from_core)
    }

    pub fn apply_adjust(&mut self, params: &AdjustParams) -> Result<(), JsValue> {
        self.inner.apply_adjust(params.inner()).map_err(js_error)
    }

    /// Apply a filter by name with a 0.0-1.0 strength.
    pub fn apply_filter(&mut self, kind: &str, strength: f32) -> Result<(), JsValue> {
        self.inner
            .apply_filter(filter_kind_from_str(kind), strength)
            .map_err(js_error)
    }

    /// Apply vignette and glow from `{ vignette, glow, glow_kernel }`.
    ///
    /// Missing fields take their defaults; `undefined` uses all defaults.
    pub fn apply_fx(&mut self, params: JsValue) -> Result<(), JsValue> {
        let params: FxParams = params_from_js(params)?;
        self.inner.apply_fx(&params).map_err(js_error)
    }

    /// Blend the other slot over the active one. Unknown modes blend as normal.
    pub fn apply_blend(&mut self, mode: &str, alpha: f32) -> Result<(), JsValue> {
        self.inner
            .apply_blend(BlendMode::parse_or_normal(mode), alpha)
            .map_err(js_error)
    }

    /// Recolor the active image with the other slot's Lab statistics.
    pub fn apply_color_transfer(&mut self) -> Result<(), JsValue> {
        self.inner.apply_color_transfer().map_err(js_error)
    }

    /// Replace the Otsu foreground of the active image with the other image.
    pub fn apply_otsu_composite(&mut self, invert: bool, feather: i32) -> Result<(), JsValue> {
        self.inner
            .apply_otsu_composite(&OtsuParams { invert, feather })
            .map_err(js_error)
    }

    pub fn free(self) {}
}

impl JsSession {
    fn active_history(&self, f: impl FnOnce(&SnapshotHistory) -> bool) -> bool {
        self.inner
            .slot(self.inner.active())
            .map(|s| f(s.history()))
            .unwrap_or(false)
    }
}
