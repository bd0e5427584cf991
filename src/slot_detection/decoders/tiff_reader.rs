use std::io::Cursor;

use tiff::ColorType;
use tiff::decoder::{Decoder, DecodingResult};
use tracing::debug;

use crate::slot_detection::common::error::{DetectionError, Result};
use crate::slot_detection::decoders::reader::FrameImageReader;
use crate::slot_detection::pixel::FrameImage;

/// TIFF frame reader. Accepts RGBA8, RGBA16 and GrayA8 images.
pub struct TiffFrameReader;

impl FrameImageReader for TiffFrameReader {
    fn read_frame(&self, data: &[u8]) -> Result<FrameImage> {
        debug!("Decoding TIFF frame, {} bytes", data.len());

        let decode_err = |e: tiff::TiffError| DetectionError::DecodeError(e.to_string());

        let mut decoder = Decoder::new(Cursor::new(data)).map_err(decode_err)?;
        let (width, height) = decoder.dimensions().map_err(decode_err)?;
        let color_type = decoder.colortype().map_err(decode_err)?;

        debug!("TIFF header: {}x{} {:?}", width, height, color_type);

        if matches!(color_type, ColorType::RGB(_) | ColorType::Gray(_)) {
            return Err(DetectionError::MissingAlpha(format!("TIFF {:?}", color_type)));
        }

        let rgba = match (color_type, decoder.read_image().map_err(decode_err)?) {
            (ColorType::RGBA(8), DecodingResult::U8(samples)) => samples,
            (ColorType::RGBA(16), DecodingResult::U16(samples)) => {
                samples.iter().map(|&v| (v >> 8) as u8).collect()
            }
            (ColorType::GrayA(8), DecodingResult::U8(samples)) => samples
                .chunks_exact(2)
                .flat_map(|ga| [ga[0], ga[0], ga[0], ga[1]])
                .collect(),
            (other, _) => {
                return Err(DetectionError::UnsupportedFormat(format!("TIFF {:?}", other)));
            }
        };

        FrameImage::new(width as usize, height as usize, rgba)
    }
}
