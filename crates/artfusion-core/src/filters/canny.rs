//! Canny edge detection on a single-channel image.
//!
//! 1. 3×3 Sobel gradients with clamped borders
//! 2. L1 magnitude `|gx| + |gy|`
//! 3. Non-maximum suppression along one of four quantized directions
//! 4. Hysteresis: pixels above `high` seed edges, which then grow through
//!    8-connected pixels above `low`
//!
//! The outermost 1-pixel frame never carries an edge.

use crate::buffer::Mask;

/// tan(22.5°)
const TAN_22_5: f32 = 0.414_213_56;
/// tan(67.5°)
const TAN_67_5: f32 = 2.414_213_6;

const NOT_EDGE: u8 = 0;
const WEAK: u8 = 1;
const STRONG: u8 = 2;

/// Detect edges and return a 0/255 map the size of `gray`.
///
/// `low` and `high` are swapped when given in the wrong order.
pub fn canny(gray: &Mask, low: f32, high: f32) -> Mask {
    let (low, high) = if low > high { (high, low) } else { (low, high) };
    let w = gray.width as usize;
    let h = gray.height as usize;
    if w < 3 || h < 3 {
        return Mask::filled(gray.width, gray.height, 0);
    }

    let (gx, gy, mag) = sobel(gray.values(), w, h);

    let mut state = vec![NOT_EDGE; w * h];
    let mut stack = Vec::new();
    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let idx = y * w + x;
            let m = mag[idx];
            if m <= low {
                continue;
            }

            let ax = gx[idx].abs();
            let ay = gy[idx].abs();
            let (n1, n2) = if ay <= ax * TAN_22_5 {
                (mag[idx - 1], mag[idx + 1])
            } else if ay >= ax * TAN_67_5 {
                (mag[idx - w], mag[idx + w])
            } else if (gx[idx] > 0.0) == (gy[idx] > 0.0) {
                (mag[idx - w - 1], mag[idx + w + 1])
            } else {
                (mag[idx - w + 1], mag[idx + w - 1])
            };

            if m > n1 && m >= n2 {
                if m > high {
                    state[idx] = STRONG;
                    stack.push(idx);
                } else {
                    state[idx] = WEAK;
                }
            }
        }
    }

    while let Some(idx) = stack.pop() {
        let x = idx % w;
        let y = idx / w;
        for ny in y - 1..=y + 1 {
            for nx in x - 1..=x + 1 {
                let n = ny * w + nx;
                if state[n] == WEAK {
                    state[n] = STRONG;
                    stack.push(n);
                }
            }
        }
    }

    let values = state
        .into_iter()
        .map(|s| if s == STRONG { 255 } else { 0 })
        .collect();
    Mask::new(gray.width, gray.height, values)
}

fn sobel(values: &[u8], w: usize, h: usize) -> (Vec<f32>, Vec<f32>, Vec<f32>) {
    let mut gx = vec![0.0f32; w * h];
    let mut gy = vec![0.0f32; w * h];
    let mut mag = vec![0.0f32; w * h];

    let at = |x: usize, y: usize| values[y * w + x] as f32;

    for y in 0..h {
        let ys = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
        for x in 0..w {
            let xs = [x.saturating_sub(1), x, (x + 1).min(w - 1)];

            let sx = (at(xs[2], ys[0]) + 2.0 * at(xs[2], ys[1]) + at(xs[2], ys[2]))
                - (at(xs[0], ys[0]) + 2.0 * at(xs[0], ys[1]) + at(xs[0], ys[2]));
            let sy = (at(xs[0], ys[2]) + 2.0 * at(xs[1], ys[2]) + at(xs[2], ys[2]))
                - (at(xs[0], ys[0]) + 2.0 * at(xs[1], ys[0]) + at(xs[2], ys[0]));

            let idx = y * w + x;
            gx[idx] = sx;
            gy[idx] = sy;
            mag[idx] = sx.abs() + sy.abs();
        }
    }

    (gx, gy, mag)
}
