//! Slot normalization module
//!
//! This module filters and orders consolidated rectangles, classifies their
//! aspect ratio and emits the normalized slot descriptors handed to callers.

mod aspect;
mod normalizer;
pub mod types;


pub use aspect::classify_aspect_ratio;
pub use normalizer::{build_slots, qualifies, sort_reading_order};
pub use types::{AspectRatio, SLOT_Z_INDEX, SlotDescriptor};
