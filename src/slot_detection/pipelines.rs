//! Detection pipelines module
//!
//! This module contains orchestration logic that takes an encoded frame image
//! from bytes or disk through decoding, validation and slot detection.

mod frame_to_slots;
pub mod types;


pub use frame_to_slots::FrameSlotPipeline;
pub use types::{PipelineConfig, PipelineConfigBuilder};
