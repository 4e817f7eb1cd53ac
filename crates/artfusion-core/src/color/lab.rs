//! CIE L*a*b* conversion (D65) in the 8-bit Lab convention.
//!
//! Channels are scaled so each one fits the 0-255 range:
//! `L * 255 / 100`, `a + 128`, `b + 128`. BGR input is sRGB encoded and is
//! linearized before the XYZ transform.

/// Lab color in the 8-bit convention (all channels nominally 0-255).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

impl Lab {
    pub fn to_array(self) -> [f32; 3] {
        [self.l, self.a, self.b]
    }

    pub fn from_array(v: [f32; 3]) -> Self {
        Self {
            l: v[0],
            a: v[1],
            b: v[2],
        }
    }
}

/// D65 reference white
const D65_X: f32 = 0.95047;
const D65_Y: f32 = 1.00000;
const D65_Z: f32 = 1.08883;

/// sRGB to XYZ matrix (D65)
const SRGB_TO_XYZ: [[f32; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.119_192, 0.9503041],
];

/// XYZ to sRGB matrix (D65)
const XYZ_TO_SRGB: [[f32; 3]; 3] = [
    [3.2404542, -1.5371385, -0.4985314],
    [-0.969_266, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
];

const DELTA: f32 = 6.0 / 29.0;

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

#[inline]
fn lab_f(t: f32) -> f32 {
    if t > DELTA * DELTA * DELTA {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

#[inline]
fn lab_f_inv(t: f32) -> f32 {
    if t > DELTA {
        t * t * t
    } else {
        3.0 * DELTA * DELTA * (t - 4.0 / 29.0)
    }
}

#[inline]
fn mul(m: &[[f32; 3]; 3], v: [f32; 3]) -> [f32; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// Convert 8-bit BGR samples to Lab.
#[inline]
pub fn bgr_to_lab(b: u8, g: u8, r: u8) -> Lab {
    let rgb = [
        srgb_to_linear(r as f32 / 255.0),
        srgb_to_linear(g as f32 / 255.0),
        srgb_to_linear(b as f32 / 255.0),
    ];
    let [x, y, z] = mul(&SRGB_TO_XYZ, rgb);

    let fx = lab_f(x / D65_X);
    let fy = lab_f(y / D65_Y);
    let fz = lab_f(z / D65_Z);

    let l = 116.0 * fy - 16.0;
    let a = 500.0 * (fx - fy);
    let bb = 200.0 * (fy - fz);

    Lab {
        l: l * 255.0 / 100.0,
        a: a + 128.0,
        b: bb + 128.0,
    }
}

/// Convert Lab back to BGR samples (0-255 float, clamped to gamut).
#[inline]
pub fn lab_to_bgr(lab: Lab) -> (f32, f32, f32) {
    let l = lab.l * 100.0 / 255.0;
    let a = lab.a - 128.0;
    let bb = lab.b - 128.0;

    let fy = (l + 16.0) / 116.0;
    let fx = fy + a / 500.0;
    let fz = fy - bb / 200.0;

    let xyz = [
        D65_X * lab_f_inv(fx),
        D65_Y * lab_f_inv(fy),
        D65_Z * lab_f_inv(fz),
    ];
    let [r, g, b] = mul(&XYZ_TO_SRGB, xyz);

    let encode = |c: f32| linear_to_srgb(c.clamp(0.0, 1.0)) * 255.0;
    (encode(b), encode(g), encode(r))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_and_black() {
        let white = bgr_to_lab(255, 255, 255);
        assert!((white.l - 255.0).abs() < 0.1, "L of white was {}", white.l);
        assert!((white.a - 128.0).abs() < 0.1);
        assert!((white.b - 128.0).abs() < 0.1);

        let black = bgr_to_lab(0, 0, 0);
        assert!(black.l.abs() < 1e-3);
        assert!((black.a - 128.0).abs() < 1e-3);
        assert!((black.b - 128.0).abs() < 1e-3);
    }

    #[test]
    fn test_gray_is_neutral() {
        let gray = bgr_to_lab(119, 119, 119);
        // sRGB 119 is close to L* 50
        assert!((gray.l * 100.0 / 255.0 - 50.0).abs() < 0.5);
        assert!((gray.a - 128.0).abs() < 0.1);
        assert!((gray.b - 128.0).abs() < 0.1);
    }

    #[test]
    fn test_red_has_positive_a() {
        let red = bgr_to_lab(0, 0, 255);
        assert!(red.a > 128.0 + 60.0);
        assert!(red.b > 128.0 + 40.0);
    }

    #[test]
    fn test_round_trip() {
        for &(b, g, r) in &[(0u8, 0u8, 0u8), (255, 255, 255), (10, 200, 30), (200, 30, 90), (128, 128, 128)] {
            let (bb, gg, rr) = lab_to_bgr(bgr_to_lab(b, g, r));
            assert!((bb - b as f32).abs() < 0.5, "b {} vs {}", bb, b);
            assert!((gg - g as f32).abs() < 0.5, "g {} vs {}", gg, g);
            assert!((rr - r as f32).abs() < 0.5, "r {} vs {}", rr, r);
        }
    }

    #[test]
    fn test_array_conversion() {
        let lab = Lab::from_array([1.0, 2.0, 3.0]);
        assert_eq!(lab.to_array(), [1.0, 2.0, 3.0]);
    }
}
