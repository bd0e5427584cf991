//! Photo slot detection module
//!
//! This module locates the transparent "holes" in a frame image and turns them
//! into ordered, normalized slot descriptors. Decoding, region extraction,
//! rectangle consolidation and slot normalization each live in their own module.

pub mod common;
pub mod pixel;
pub mod regions;
pub mod slots;
pub mod detector;
pub mod decoders;
pub mod pipelines;

#[cfg(test)]
pub(crate) mod test_support;

pub use common::{
    DetectionError,
    Result,
};

pub use pixel::{
    Coordinate,
    FrameImage,
    PixelBuffer,
    is_transparent,
};

pub use regions::{
    Rectangle,
    Region,
    VisitedMap,
    extract_regions,
    flood_fill,
    merge_nearby,
    to_rectangle,
};

pub use slots::{
    AspectRatio,
    SlotDescriptor,
    build_slots,
    classify_aspect_ratio,
};

pub use detector::{
    DetectionConfig,
    DetectionConfigBuilder,
    DetectionStats,
    SlotDetection,
    detect_slots,
    detect_slots_with_stats,
};

pub use decoders::{
    AutoFrameReader,
    FrameFormat,
    FrameImageReader,
    PngFrameReader,
    TiffFrameReader,
};

pub use pipelines::{
    FrameSlotPipeline,
    PipelineConfig,
    PipelineConfigBuilder,
};
