//! Pixel data types

use crate::slot_detection::common::error::{DetectionError, Result};

/// Number of interleaved samples per pixel (R, G, B, A)
pub const CHANNELS: usize = 4;

/// Offset of the alpha sample within one pixel
const ALPHA_OFFSET: usize = 3;

/// Integer pixel coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Read-only view over decoded RGBA8 image data
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
    width: usize,
    height: usize,
    /// Row-major RGBA samples [R, G, B, A, R, G, B, A, ...]
    data: &'a [u8],
}

impl<'a> PixelBuffer<'a> {
    /// Wraps `data` as a `width` x `height` RGBA8 buffer.
    ///
    /// Fails with `BufferSizeMismatch` unless `data` holds exactly
    /// `width * height * 4` bytes. Zero-sized buffers are accepted.
    pub fn new(width: usize, height: usize, data: &'a [u8]) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(CHANNELS))
            .ok_or(DetectionError::InvalidDimensions(width, height))?;

        if data.len() != expected {
            return Err(DetectionError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self { width, height, data })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Linear pixel index `y * width + x`, shared with the visited bitmap.
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Alpha sample of an in-bounds pixel. The caller guarantees bounds.
    #[inline]
    pub fn alpha(&self, x: usize, y: usize) -> u8 {
        self.data[self.index(x, y) * CHANNELS + ALPHA_OFFSET]
    }

    /// Bounds-checked alpha lookup.
    pub fn alpha_at(&self, x: usize, y: usize) -> Result<u8> {
        if !self.contains(x, y) {
            return Err(DetectionError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.alpha(x, y))
    }
}

/// Owned decoded frame image, normalized to RGBA8
#[derive(Debug, Clone)]
pub struct FrameImage {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// RGBA pixel data interleaved [R, G, B, A, R, G, B, A, ...]
    pub data: Vec<u8>,
}

impl FrameImage {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        PixelBuffer::new(width, height, &data)?;
        Ok(Self { width, height, data })
    }

    pub fn as_buffer(&self) -> Result<PixelBuffer<'_>> {
        PixelBuffer::new(self.width, self.height, &self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_size_must_match() {
        let data = vec![0u8; 4 * 4 * CHANNELS - 1];
        let result = PixelBuffer::new(4, 4, &data);
        assert!(matches!(
            result,
            Err(DetectionError::BufferSizeMismatch { expected: 64, actual: 63 })
        ));
    }

    #[test]
    fn test_zero_sized_buffer_is_valid() {
        let buffer = PixelBuffer::new(0, 10, &[]).unwrap();
        assert!(buffer.is_empty());
        assert_eq!(buffer.pixel_count(), 0);
    }

    #[test]
    fn test_alpha_at_checks_bounds() {
        let data = vec![1, 2, 3, 4, 5, 6, 7, 8];
        let buffer = PixelBuffer::new(2, 1, &data).unwrap();

        assert_eq!(buffer.alpha_at(1, 0).unwrap(), 8);
        assert!(matches!(
            buffer.alpha_at(0, 1),
            Err(DetectionError::OutOfBounds { x: 0, y: 1, width: 2, height: 1 })
        ));
    }

    #[test]
    fn test_frame_image_validates_length() {
        assert!(FrameImage::new(2, 2, vec![0; 16]).is_ok());
        assert!(FrameImage::new(2, 2, vec![0; 12]).is_err());
    }
}
