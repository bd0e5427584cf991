//! Synthetic frame images for tests.

use crate::slot_detection::pixel::{CHANNELS, FrameImage, PixelBuffer};

/// Fully opaque white canvas with transparent holes punched into it.
pub struct FrameCanvas {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl FrameCanvas {
    pub fn opaque(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: [255u8; CHANNELS].repeat(width * height),
        }
    }

    /// Sets alpha to `alpha` over the half-open box `[x, x+w) x [y, y+h)`.
    pub fn fill_alpha(mut self, x: usize, y: usize, w: usize, h: usize, alpha: u8) -> Self {
        for row in y..(y + h).min(self.height) {
            for col in x..(x + w).min(self.width) {
                self.data[(row * self.width + col) * CHANNELS + 3] = alpha;
            }
        }
        self
    }

    pub fn hole(self, x: usize, y: usize, w: usize, h: usize) -> Self {
        self.fill_alpha(x, y, w, h, 0)
    }

    pub fn buffer(&self) -> PixelBuffer<'_> {
        PixelBuffer::new(self.width, self.height, &self.data).unwrap()
    }

    pub fn into_frame(self) -> FrameImage {
        FrameImage::new(self.width, self.height, self.data).unwrap()
    }
}
