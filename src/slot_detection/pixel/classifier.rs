use crate::slot_detection::pixel::types::PixelBuffer;

/// Returns true when the pixel at (`x`, `y`) belongs to a candidate slot,
/// i.e. its alpha is strictly below `alpha_threshold`.
///
/// The coordinate must be in bounds; out-of-range access is rejected earlier
/// by the region extractor.
#[inline]
pub fn is_transparent(buffer: &PixelBuffer<'_>, x: usize, y: usize, alpha_threshold: u8) -> bool {
    buffer.alpha(x, y) < alpha_threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_row(alphas: &[u8]) -> Vec<u8> {
        alphas.iter().flat_map(|&a| [255, 255, 255, a]).collect()
    }

    #[test]
    fn test_threshold_is_strict() {
        let data = single_row(&[0, 49, 50, 255]);
        let buffer = PixelBuffer::new(4, 1, &data).unwrap();

        assert!(is_transparent(&buffer, 0, 0, 50));
        assert!(is_transparent(&buffer, 1, 0, 50));
        assert!(!is_transparent(&buffer, 2, 0, 50));
        assert!(!is_transparent(&buffer, 3, 0, 50));
    }

    #[test]
    fn test_zero_threshold_matches_nothing() {
        let data = single_row(&[0, 0]);
        let buffer = PixelBuffer::new(2, 1, &data).unwrap();

        assert!(!is_transparent(&buffer, 0, 0, 0));
    }

    #[test]
    fn test_color_channels_are_ignored() {
        let data = vec![0, 0, 0, 255, 255, 0, 0, 10];
        let buffer = PixelBuffer::new(2, 1, &data).unwrap();

        assert!(!is_transparent(&buffer, 0, 0, 50));
        assert!(is_transparent(&buffer, 1, 0, 50));
    }
}
