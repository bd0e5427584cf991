//! PNG frame reader built on the `png` crate.
//!
//! Palette and tRNS transparency are expanded to a real alpha channel and
//! 16-bit samples are stripped to 8 bits before conversion to RGBA8.

use std::io::Cursor;

use tracing::debug;

use crate::slot_detection::common::error::{DetectionError, Result};
use crate::slot_detection::decoders::reader::FrameImageReader;
use crate::slot_detection::pixel::FrameImage;

pub struct PngFrameReader;

impl FrameImageReader for PngFrameReader {
    fn read_frame(&self, data: &[u8]) -> Result<FrameImage> {
        debug!("Decoding PNG frame, {} bytes", data.len());

        let mut decoder = png::Decoder::new(Cursor::new(data));
        decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

        let mut reader = decoder
            .read_info()
            .map_err(|e| DetectionError::DecodeError(e.to_string()))?;

        let (color_type, _) = reader.output_color_type();
        let buffer_size = reader
            .output_buffer_size()
            .ok_or_else(|| DetectionError::DecodeError("PNG frame is too large".to_string()))?;

        let mut buf = vec![0u8; buffer_size];
        let frame = reader
            .next_frame(&mut buf)
            .map_err(|e| DetectionError::DecodeError(e.to_string()))?;
        buf.truncate(frame.buffer_size());

        let width = frame.width as usize;
        let height = frame.height as usize;
        debug!("Decoded PNG: {}x{} {:?}", width, height, color_type);

        let rgba = match color_type {
            png::ColorType::Rgba => buf,
            png::ColorType::GrayscaleAlpha => buf
                .chunks_exact(2)
                .flat_map(|ga| [ga[0], ga[0], ga[0], ga[1]])
                .collect(),
            png::ColorType::Rgb | png::ColorType::Grayscale => {
                return Err(DetectionError::MissingAlpha(format!("PNG {:?}", color_type)));
            }
            other => {
                return Err(DetectionError::UnsupportedFormat(format!("PNG {:?}", other)));
            }
        };

        FrameImage::new(width, height, rgba)
    }
}
