//! Pixel access module
//!
//! This module provides the RGBA pixel views the detector reads from and the
//! alpha-threshold pixel classifier.

mod classifier;
pub mod types;

pub use classifier::is_transparent;
pub use types::{Coordinate, FrameImage, PixelBuffer, CHANNELS};
