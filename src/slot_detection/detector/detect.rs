use tracing::{debug, info_span, instrument};

use crate::slot_detection::detector::types::{DetectionConfig, DetectionStats, SlotDetection};
use crate::slot_detection::pixel::PixelBuffer;
use crate::slot_detection::regions::{Rectangle, extract_regions, merge_nearby, to_rectangle};
use crate::slot_detection::slots::{SlotDescriptor, build_slots, qualifies};

/// Detects the photo slots of a frame image.
///
/// Never fails: a zero-sized or fully opaque buffer yields an empty list, which
/// callers treat as "no slots detected".
pub fn detect_slots(buffer: &PixelBuffer<'_>, config: &DetectionConfig) -> Vec<SlotDescriptor> {
    detect_slots_with_stats(buffer, config).slots
}

/// Same as [`detect_slots`], also reporting how many candidates each stage kept.
#[instrument(skip_all, fields(width = buffer.width(), height = buffer.height()))]
pub fn detect_slots_with_stats(buffer: &PixelBuffer<'_>, config: &DetectionConfig) -> SlotDetection {
    if buffer.is_empty() {
        debug!("Zero-sized buffer, no slots");
        return SlotDetection {
            slots: Vec::new(),
            stats: DetectionStats::default(),
        };
    }

    let rectangles: Vec<Rectangle> = {
        let _span = info_span!("extract_regions", alpha_threshold = config.alpha_threshold).entered();
        extract_regions(buffer, config.alpha_threshold, config.min_region_pixels)
            .iter()
            .map(to_rectangle)
            .collect()
    };
    let regions = rectangles.len();

    let merged = {
        let _span = info_span!("merge_rectangles", tolerance = config.merge_tolerance).entered();
        merge_nearby(rectangles, config.merge_tolerance)
    };
    let merged_rectangles = merged.len();
    let qualifying_rectangles = merged.iter().filter(|rect| qualifies(rect, config)).count();

    let slots = {
        let _span = info_span!("build_slots").entered();
        build_slots(merged, buffer.width(), buffer.height(), config)
    };

    let stats = DetectionStats {
        regions,
        merged_rectangles,
        qualifying_rectangles,
        truncated: qualifying_rectangles - slots.len(),
    };
    debug!(?stats, slots = slots.len(), "Slot detection complete");

    SlotDetection { slots, stats }
}
