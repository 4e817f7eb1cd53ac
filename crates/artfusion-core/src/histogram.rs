//! Gray-level histogram used by Otsu thresholding.

use crate::buffer::Mask;

/// 256-bin histogram of a single-channel image.
pub fn gray_histogram(gray: &Mask) -> [u32; 256] {
    let mut bins = [0u32; 256];
    for &v in gray.values() {
        bins[v as usize] += 1;
    }
    bins
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_mask() {
        let bins = gray_histogram(&Mask::new(0, 0, vec![]));
        assert!(bins.iter().all(|&c| c == 0));
    }

    #[test]
    fn test_gray_histogram_counts() {
        let gray = Mask::new(3, 2, vec![0, 0, 7, 255, 7, 7]);
        let bins = gray_histogram(&gray);
        assert_eq!(bins[0], 2);
        assert_eq!(bins[7], 3);
        assert_eq!(bins[255], 1);
        assert_eq!(bins.iter().sum::<u32>(), 6);
    }

    #[test]
    fn test_counts_sum_to_pixel_count() {
        let gray = crate::luminance::to_gray(&crate::BgrImage::filled(5, 4, [10, 200, 30]));
        let bins = gray_histogram(&gray);
        assert_eq!(bins.iter().sum::<u32>(), 20);
        assert_eq!(bins.iter().filter(|&&c| c > 0).count(), 1);
    }
}
