//! Two-slot editing session.
//!
//! A session holds up to two images. One slot is active and receives every
//! edit; two-image operations read the other slot. Each slot keeps a `base`
//! image that live adjustment previews start from, and its own undo/redo
//! history. Every committed operation snapshots the active image first and
//! then replaces both image and base with the result.

mod history;

pub use history::SnapshotHistory;

use thiserror::Error;

use crate::blend::{blend, BlendMode};
use crate::buffer::BgrImage;
use crate::filters::{blur, cartoon, edges, grayscale, sepia, sharpen};
use crate::fx::{glow, vignette};
use crate::mask::{composite_by_mask, otsu_mask};
use crate::transfer::reinhard_color_transfer;
use crate::{adjust, AdjustParams, FilterKind, FxParams, OtsuParams};

/// Number of image slots.
pub const SLOT_COUNT: usize = 2;

/// Errors from session operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The active slot holds no image.
    #[error("No image loaded in the active slot")]
    NoActiveImage,

    /// A two-image operation found the other slot empty.
    #[error("Both images are required for this operation")]
    BothImagesRequired,

    /// Slot index out of range.
    #[error("Invalid slot index: {0}")]
    InvalidSlot(usize),
}

/// One image slot.
#[derive(Debug, Clone, Default)]
pub struct Slot {
    image: Option<BgrImage>,
    base: Option<BgrImage>,
    history: SnapshotHistory,
}

impl Slot {
    pub fn image(&self) -> Option<&BgrImage> {
        self.image.as_ref()
    }

    pub fn base(&self) -> Option<&BgrImage> {
        self.base.as_ref()
    }

    pub fn history(&self) -> &SnapshotHistory {
        &self.history
    }

    fn commit(&mut self, image: BgrImage) {
        self.base = Some(image.clone());
        self.image = Some(image);
    }
}

/// Run a filter with a single 0-based strength, as the filter panel does.
///
/// `strength` is the panel slider divided by 100. Each filter maps it onto
/// its own parameters:
/// - blur: kernel `int(1 + 30s)`
/// - sharpen: amount `0.5 + s`
/// - edges: `t = int(50 + 200s)`, thresholds `(t / 2, t)`
/// - cartoon: bilateral sigma `int(5 + 30s)`, edge threshold `int(80 + 200s)`
/// - sepia: strength `s`
pub fn filter_with_strength(image: &BgrImage, kind: FilterKind, strength: f32) -> BgrImage {
    match kind {
        FilterKind::Grayscale => grayscale(image),
        FilterKind::Sepia => sepia(image, strength),
        FilterKind::Blur => blur(image, (1.0 + strength * 30.0) as i32),
        FilterKind::Sharpen => sharpen(image, 0.5 + strength),
        FilterKind::Edges => {
            let t = (50.0 + strength * 200.0) as i32;
            edges(image, (t / 2) as f32, t as f32)
        }
        FilterKind::Cartoon => cartoon(
            image,
            (5.0 + strength * 30.0) as i32 as f32,
            (80.0 + strength * 200.0) as i32 as f32,
        ),
    }
}

/// Headless model of the two-image editor.
#[derive(Debug, Clone, Default)]
pub struct Session {
    slots: [Slot; SLOT_COUNT],
    active: usize,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the active slot.
    pub fn active(&self) -> usize {
        self.active
    }

    pub fn set_active(&mut self, slot: usize) -> Result<(), SessionError> {
        if slot >= SLOT_COUNT {
            return Err(SessionError::InvalidSlot(slot));
        }
        self.active = slot;
        Ok(())
    }

    pub fn slot(&self, slot: usize) -> Result<&Slot, SessionError> {
        self.slots.get(slot).ok_or(SessionError::InvalidSlot(slot))
    }

    /// Image in the active slot.
    pub fn active_image(&self) -> Option<&BgrImage> {
        self.slots[self.active].image()
    }

    /// Image in the non-active slot.
    pub fn other_image(&self) -> Option<&BgrImage> {
        self.slots[1 - self.active].image()
    }

    /// Put `image` into `slot`, resetting its base and history.
    pub fn load(&mut self, slot: usize, image: BgrImage) -> Result<(), SessionError> {
        let target = self
            .slots
            .get_mut(slot)
            .ok_or(SessionError::InvalidSlot(slot))?;
        log::debug!("loaded {}x{} image into slot {}", image.width, image.height, slot);
        target.commit(image);
        target.history.clear();
        Ok(())
    }

    /// Snapshot the active image onto its undo stack.
    pub fn push_state(&mut self) {
        let slot = &mut self.slots[self.active];
        if let Some(image) = &slot.image {
            slot.history.push(image.clone());
        }
    }

    /// Undo the last committed operation on the active slot.
    ///
    /// Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let slot = &mut self.slots[self.active];
        let Some(current) = &slot.image else {
            return false;
        };
        match slot.history.undo(current) {
            Some(previous) => {
                slot.commit(previous);
                true
            }
            None => false,
        }
    }

    /// Redo the last undone operation on the active slot.
    ///
    /// Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let slot = &mut self.slots[self.active];
        let Some(current) = &slot.image else {
            return false;
        };
        match slot.history.redo(current) {
            Some(next) => {
                slot.commit(next);
                true
            }
            None => false,
        }
    }

    /// Adjustment preview computed from the active base. Nothing is committed.
    pub fn preview_adjust(&self, params: &AdjustParams) -> Option<BgrImage> {
        self.slots[self.active]
            .base()
            .map(|base| adjust(base, params))
    }

    pub fn apply_adjust(&mut self, params: &AdjustParams) -> Result<(), SessionError> {
        let result = {
            let base = self.slots[self.active]
                .base()
                .ok_or(SessionError::NoActiveImage)?;
            adjust(base, params)
        };
        self.commit(result);
        Ok(())
    }

    pub fn apply_filter(&mut self, kind: FilterKind, strength: f32) -> Result<(), SessionError> {
        let image = self.require_active()?;
        let result = filter_with_strength(image, kind, strength);
        self.commit(result);
        Ok(())
    }

    /// Vignette when its strength is positive, then glow when its amount is.
    pub fn apply_fx(&mut self, params: &FxParams) -> Result<(), SessionError> {
        let mut out = self.require_active()?.clone();
        if params.vignette > 0.0 {
            out = vignette(&out, params.vignette);
        }
        if params.glow > 0.0 {
            out = glow(&out, params.glow, params.glow_kernel);
        }
        self.commit(out);
        Ok(())
    }

    /// Blend the other slot over the active one.
    pub fn apply_blend(&mut self, mode: BlendMode, alpha: f32) -> Result<(), SessionError> {
        let (a, b) = self.require_both()?;
        let result = blend(a, b, mode, alpha);
        self.commit(result);
        Ok(())
    }

    /// Recolor the active image with the other image's palette.
    pub fn apply_color_transfer(&mut self) -> Result<(), SessionError> {
        let (source, target) = self.require_both()?;
        let result = reinhard_color_transfer(source, target);
        self.commit(result);
        Ok(())
    }

    /// Replace the Otsu foreground of the active image with the other image.
    pub fn apply_otsu_composite(&mut self, params: &OtsuParams) -> Result<(), SessionError> {
        let (base, other) = self.require_both()?;
        let mask = otsu_mask(base, params.invert, params.feather);
        let result = composite_by_mask(base, other, &mask);
        self.commit(result);
        Ok(())
    }

    fn require_active(&self) -> Result<&BgrImage, SessionError> {
        self.active_image().ok_or(SessionError::NoActiveImage)
    }

    fn require_both(&self) -> Result<(&BgrImage, &BgrImage), SessionError> {
        match (self.active_image(), self.other_image()) {
            (Some(a), Some(b)) => Ok((a, b)),
            _ => Err(SessionError::BothImagesRequired),
        }
    }

    /// Snapshot, then make `result` the active image and base.
    fn commit(&mut self, result: BgrImage) {
        self.push_state();
        self.slots[self.active].commit(result);
    }
}
