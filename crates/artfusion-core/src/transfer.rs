//! Reinhard color transfer.
//!
//! The source is moved into Lab space and each channel is shifted and scaled
//! so its mean and standard deviation match the target's. The source keeps
//! its structure and takes on the target's palette.

use serde::{Deserialize, Serialize};

use crate::buffer::{quantize, BgrImage};
use crate::color::{bgr_to_lab, lab_to_bgr, Lab};

/// Added to every standard deviation before it is used as a divisor.
pub const STD_EPSILON: f64 = 1e-6;

/// Per-channel Lab mean and population standard deviation, in the 8-bit Lab
/// convention, ordered `[L, a, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LabStats {
    pub mean: [f64; 3],
    pub std: [f64; 3],
}

fn to_lab(image: &BgrImage) -> Vec<Lab> {
    image
        .pixels()
        .chunks_exact(3)
        .map(|px| bgr_to_lab(px[0], px[1], px[2]))
        .collect()
}

fn statistics(lab: &[Lab]) -> LabStats {
    if lab.is_empty() {
        return LabStats::default();
    }
    let n = lab.len() as f64;

    let mut mean = [0.0f64; 3];
    for px in lab {
        for (m, v) in mean.iter_mut().zip(px.to_array()) {
            *m += v as f64;
        }
    }
    for m in &mut mean {
        *m /= n;
    }

    let mut var = [0.0f64; 3];
    for px in lab {
        for ((acc, v), m) in var.iter_mut().zip(px.to_array()).zip(mean) {
            let d = v as f64 - m;
            *acc += d * d;
        }
    }

    LabStats {
        mean,
        std: var.map(|v| (v / n).sqrt()),
    }
}

/// Lab statistics of an image. An empty image gives all zeros.
pub fn lab_statistics(image: &BgrImage) -> LabStats {
    statistics(&to_lab(image))
}

/// Recolor `source` with the palette of `target`.
///
/// Each Lab channel `c` of `source` becomes
/// `(c - μs) * (σt / σs) + μt`, clipped to 0-255. The result has
/// `source`'s dimensions. If either image is empty, `source` is returned.
pub fn reinhard_color_transfer(source: &BgrImage, target: &BgrImage) -> BgrImage {
    if source.is_empty() || target.is_empty() {
        return source.clone();
    }

    let src_lab = to_lab(source);
    let src = statistics(&src_lab);
    let tgt = lab_statistics(target);

    let scale: [f64; 3] =
        std::array::from_fn(|c| (tgt.std[c] + STD_EPSILON) / (src.std[c] + STD_EPSILON));

    let mut out = Vec::with_capacity(source.pixels().len());
    for px in src_lab {
        let mapped: [f32; 3] = std::array::from_fn(|c| {
            let v = (px.to_array()[c] as f64 - src.mean[c]) * scale[c] + tgt.mean[c];
            v.clamp(0.0, 255.0) as f32
        });
        let (b, g, r) = lab_to_bgr(Lab::from_array(mapped));
        out.extend_from_slice(&[quantize(b), quantize(g), quantize(r)]);
    }
    BgrImage::new(source.width, source.height, out)
}
