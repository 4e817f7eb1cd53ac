//! HSV conversion with the 8-bit hue convention.
//!
//! Hue is stored in half-degrees so a full turn fits in `[0, 180)`.
//! Saturation and value are in `[0, 255]`.

/// HSV color with hue in `[0, 180)` and saturation/value in `[0, 255]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

/// Convert BGR samples (0-255) to HSV.
#[inline]
pub fn bgr_to_hsv(b: f32, g: f32, r: f32) -> Hsv {
    let v = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = v - min;

    let s = if v > 0.0 { diff / v * 255.0 } else { 0.0 };

    let mut h = if diff <= 0.0 {
        0.0
    } else if v == r {
        60.0 * (g - b) / diff
    } else if v == g {
        120.0 + 60.0 * (b - r) / diff
    } else {
        240.0 + 60.0 * (r - g) / diff
    };
    if h < 0.0 {
        h += 360.0;
    }

    Hsv { h: h / 2.0, s, v }
}

/// Convert HSV back to BGR samples (0-255, unclamped float).
#[inline]
pub fn hsv_to_bgr(hsv: Hsv) -> (f32, f32, f32) {
    let v = hsv.v / 255.0;
    let s = hsv.s / 255.0;
    let h = (hsv.h * 2.0).rem_euclid(360.0) / 60.0;

    let c = v * s;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    ((b + m) * 255.0, (g + m) * 255.0, (r + m) * 255.0)
}
