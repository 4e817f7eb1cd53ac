//! Separable Gaussian convolution.
//!
//! Kernels are square with an odd side length. When no sigma is given it is
//! derived from the kernel size as `0.3 * ((k - 1) * 0.5 - 1) + 0.8`, and
//! sizes up to 7 use the exact binomial taps instead of sampled Gaussians.
//!
//! Borders reflect around the edge sample without repeating it
//! (`cba|abcd|dcb`).

use crate::buffer::quantize;

/// Binomial taps used for small kernels when sigma is derived from size.
const SMALL_KERNELS: [&[f32]; 4] = [
    &[1.0],
    &[0.25, 0.5, 0.25],
    &[0.0625, 0.25, 0.375, 0.25, 0.0625],
    &[0.03125, 0.109375, 0.21875, 0.28125, 0.21875, 0.109375, 0.03125],
];

/// Coerce a caller-supplied kernel size to an odd value of at least 1.
///
/// Even sizes round up (`4 -> 5`); zero and negative sizes become 1.
#[inline]
pub fn coerce_kernel_size(k: i32) -> usize {
    (k | 1).max(1) as usize
}

/// Kernel size used for a given sigma on 8-bit data (`round(6 * sigma + 1) | 1`).
#[inline]
pub fn kernel_size_for_sigma(sigma: f32) -> usize {
    (((sigma * 6.0 + 1.0).round() as i32) | 1).max(1) as usize
}

/// Sigma derived from kernel size when the caller passes none.
#[inline]
pub fn sigma_for_kernel_size(ksize: usize) -> f32 {
    0.3 * ((ksize as f32 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Largest kernel built for a `width x height` image: its radius spans the
/// longest side, so every tap past it would only revisit reflected samples.
#[inline]
pub(crate) fn max_kernel_size(width: usize, height: usize) -> usize {
    2 * width.max(height) + 1
}

/// Build a normalized 1-D Gaussian kernel.
///
/// `sigma <= 0` derives sigma from `ksize`.
pub fn gaussian_kernel(ksize: usize, sigma: f32) -> Vec<f32> {
    let ksize = ksize.max(1) | 1;
    if sigma <= 0.0 && ksize <= 7 {
        return SMALL_KERNELS[ksize / 2].to_vec();
    }
    let sigma = if sigma > 0.0 {
        sigma
    } else {
        sigma_for_kernel_size(ksize)
    };

    let half = (ksize / 2) as f32;
    let denom = 2.0 * sigma * sigma;
    let mut kernel: Vec<f32> = (0..ksize)
        .map(|i| {
            let x = i as f32 - half;
            (-(x * x) / denom).exp()
        })
        .collect();
    let sum: f32 = kernel.iter().sum();
    for w in &mut kernel {
        *w /= sum;
    }
    kernel
}

/// Map an out-of-range index back into `0..n` by reflection without
/// repeating the border sample.
#[inline]
pub(crate) fn reflect_101(mut i: isize, n: usize) -> usize {
    if n == 1 {
        return 0;
    }
    let last = n as isize - 1;
    loop {
        if i < 0 {
            i = -i;
        } else if i > last {
            i = 2 * last - i;
        } else {
            return i as usize;
        }
    }
}

/// Convolve interleaved samples with `kernel` horizontally then vertically.
pub(crate) fn convolve_separable(
    data: &[f32],
    width: usize,
    height: usize,
    channels: usize,
    kernel: &[f32],
) -> Vec<f32> {
    if kernel.len() == 1 || width == 0 || height == 0 {
        return data.iter().map(|v| v * kernel[0]).collect();
    }
    let half = (kernel.len() / 2) as isize;
    let stride = width * channels;

    let mut horizontal = vec![0.0f32; data.len()];
    for y in 0..height {
        let row = &data[y * stride..(y + 1) * stride];
        let out = &mut horizontal[y * stride..(y + 1) * stride];
        for x in 0..width {
            for c in 0..channels {
                let mut acc = 0.0;
                for (k, w) in kernel.iter().enumerate() {
                    let sx = reflect_101(x as isize + k as isize - half, width);
                    acc += row[sx * channels + c] * w;
                }
                out[x * channels + c] = acc;
            }
        }
    }

    let mut result = vec![0.0f32; data.len()];
    for y in 0..height {
        for (k, w) in kernel.iter().enumerate() {
            let sy = reflect_101(y as isize + k as isize - half, height);
            let src = &horizontal[sy * stride..(sy + 1) * stride];
            let out = &mut result[y * stride..(y + 1) * stride];
            for (o, s) in out.iter_mut().zip(src) {
                *o += s * w;
            }
        }
    }
    result
}

/// Gaussian-blur interleaved 8-bit samples, returning unquantized floats.
pub(crate) fn gaussian_blur_f32(
    samples: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    ksize: usize,
    sigma: f32,
) -> Vec<f32> {
    let data: Vec<f32> = samples.iter().map(|&v| v as f32).collect();
    let limit = max_kernel_size(width, height);
    let kernel = if ksize > limit {
        // Sigma still follows the requested size
        let sigma = if sigma > 0.0 {
            sigma
        } else {
            sigma_for_kernel_size(ksize)
        };
        log::debug!("gaussian kernel {} capped to {}", ksize, limit);
        gaussian_kernel(limit, sigma)
    } else {
        gaussian_kernel(ksize, sigma)
    };
    convolve_separable(&data, width, height, channels, &kernel)
}

/// Gaussian-blur interleaved 8-bit samples.
pub(crate) fn gaussian_blur_u8(
    samples: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    ksize: usize,
    sigma: f32,
) -> Vec<u8> {
    if ksize <= 1 {
        return samples.to_vec();
    }
    gaussian_blur_f32(samples, width, height, channels, ksize, sigma)
        .into_iter()
        .map(quantize)
        .collect()
}
