//! Slot detector module
//!
//! This module wires the pixel classifier, region extractor, rectangle
//! consolidator and slot normalizer into the `detect_slots` entry point.

mod detect;
pub mod types;


pub use detect::{detect_slots, detect_slots_with_stats};
pub use types::{DetectionConfig, DetectionConfigBuilder, DetectionStats, SlotDetection};
