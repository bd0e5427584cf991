//! Frame image decoding module
//!
//! This module turns encoded frame images into RGBA8 `FrameImage`s and rejects
//! images that carry no transparency information.

mod reader;
mod format;
mod png_reader;
mod tiff_reader;
mod auto_reader;

#[cfg(test)]
mod tests;

pub use reader::FrameImageReader;
pub use format::FrameFormat;
pub use png_reader::PngFrameReader;
pub use tiff_reader::TiffFrameReader;
pub use auto_reader::AutoFrameReader;
