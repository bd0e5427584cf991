use crate::slot_detection::common::error::{DetectionError, Result};
use crate::slot_detection::decoders::format::FrameFormat;
use crate::slot_detection::decoders::png_reader::PngFrameReader;
use crate::slot_detection::decoders::reader::FrameImageReader;
use crate::slot_detection::decoders::tiff_reader::TiffFrameReader;
use crate::slot_detection::pixel::FrameImage;

/// Dispatches to the PNG or TIFF reader based on the file signature.
pub struct AutoFrameReader;

impl FrameImageReader for AutoFrameReader {
    fn read_frame(&self, data: &[u8]) -> Result<FrameImage> {
        match FrameFormat::detect(data) {
            Some(FrameFormat::Png) => PngFrameReader.read_frame(data),
            Some(FrameFormat::Tiff) => TiffFrameReader.read_frame(data),
            None => Err(DetectionError::UnsupportedFormat(
                "unrecognized frame image signature".to_string(),
            )),
        }
    }
}
