use crate::slot_detection::common::error::Result;
use crate::slot_detection::pixel::FrameImage;

pub trait FrameImageReader {
    fn read_frame(&self, data: &[u8]) -> Result<FrameImage>;
}
