//! Otsu thresholding.
//!
//! The threshold `t` splits the histogram into `0..=t` and `t+1..=255` and
//! maximizes the between-class variance `w0 * w1 * (μ0 - μ1)²`. A single
//! pass accumulates integer counts and sums, so every candidate sees exactly
//! the same arithmetic and tied partitions compare equal.

use crate::buffer::Mask;
use crate::filters::gaussian::{coerce_kernel_size, gaussian_blur_u8};
use crate::histogram::gray_histogram;
use crate::luminance::to_gray;
use crate::BgrImage;

/// Pick the Otsu threshold for a 256-bin histogram.
///
/// When a run of consecutive thresholds ties at the maximum, the midpoint of
/// the run is returned. A histogram with one occupied bin returns that bin;
/// an all-zero histogram returns 0.
pub fn otsu_threshold(histogram: &[u32; 256]) -> u8 {
    let total: u64 = histogram.iter().map(|&c| c as u64).sum();
    let sum_all: u64 = histogram
        .iter()
        .enumerate()
        .map(|(i, &c)| i as u64 * c as u64)
        .sum();

    let mut count_below = 0u64;
    let mut sum_below = 0u64;
    let mut best = 0.0f64;
    let mut run: Option<(usize, usize)> = None;

    for (t, &count) in histogram.iter().enumerate() {
        count_below += count as u64;
        sum_below += t as u64 * count as u64;

        let count_above = total - count_below;
        if count_below == 0 || count_above == 0 {
            continue;
        }

        let w0 = count_below as f64;
        let w1 = count_above as f64;
        let mu0 = sum_below as f64 / w0;
        let mu1 = (sum_all - sum_below) as f64 / w1;
        let variance = w0 * w1 * (mu0 - mu1) * (mu0 - mu1);

        match run {
            Some((_, end)) if variance == best && end + 1 == t => {
                run = run.map(|(start, _)| (start, t));
            }
            _ if variance > best => {
                best = variance;
                run = Some((t, t));
            }
            _ => {}
        }
    }

    match run {
        Some((start, end)) => ((start + end) / 2) as u8,
        None => histogram.iter().position(|&c| c > 0).unwrap_or(0) as u8,
    }
}

/// Foreground mask of `image` by Otsu threshold.
///
/// Gray values above the threshold become 255 and the rest 0. `invert` swaps
/// foreground and background. `feather > 0` softens the mask with a Gaussian
/// blur of kernel `feather | 1`.
pub fn otsu_mask(image: &BgrImage, invert: bool, feather: i32) -> Mask {
    let gray = to_gray(image);
    let threshold = otsu_threshold(&gray_histogram(&gray));
    log::debug!("otsu threshold {}", threshold);

    let mut values: Vec<u8> = gray
        .values()
        .iter()
        .map(|&v| if v > threshold { 255 } else { 0 })
        .collect();

    if invert {
        for v in &mut values {
            *v = 255 - *v;
        }
    }

    if feather > 0 {
        let ksize = coerce_kernel_size(feather);
        values = gaussian_blur_u8(
            &values,
            image.width as usize,
            image.height as usize,
            1,
            ksize,
            0.0,
        );
    }

    Mask::new(image.width, image.height, values)
}
