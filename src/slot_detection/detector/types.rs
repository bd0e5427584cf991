//! Slot detection configuration and result types

use crate::slot_detection::slots::SlotDescriptor;

/// Tuning parameters for slot detection
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionConfig {
    /// Minimum slot width in pixels
    pub min_width: usize,
    /// Minimum slot height in pixels
    pub min_height: usize,
    /// Pixels with alpha strictly below this value are transparent
    pub alpha_threshold: u8,
    /// Gap in pixels across which rectangles are merged
    pub merge_tolerance: usize,
    /// Maximum number of slots returned
    pub max_slots: usize,
    /// Connected regions smaller than this are treated as noise
    pub min_region_pixels: usize,
    /// Rectangles whose tops differ by less than this share a row
    pub row_band_tolerance: usize,
    /// Allowed distance between a slot ratio and a canonical ratio
    pub aspect_tolerance: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_width: 80,
            min_height: 100,
            alpha_threshold: 50,
            merge_tolerance: 15,
            max_slots: 8,
            min_region_pixels: 100,
            row_band_tolerance: 50,
            aspect_tolerance: 0.1,
        }
    }
}

impl DetectionConfig {
    pub fn builder() -> DetectionConfigBuilder {
        DetectionConfigBuilder::default()
    }
}

/// Builder for DetectionConfig
#[derive(Default)]
pub struct DetectionConfigBuilder {
    min_width: Option<usize>,
    min_height: Option<usize>,
    alpha_threshold: Option<u8>,
    merge_tolerance: Option<usize>,
    max_slots: Option<usize>,
    min_region_pixels: Option<usize>,
    row_band_tolerance: Option<usize>,
    aspect_tolerance: Option<f64>,
}

impl DetectionConfigBuilder {
    pub fn min_width(mut self, min_width: usize) -> Self {
        self.min_width = Some(min_width);
        self
    }

    pub fn min_height(mut self, min_height: usize) -> Self {
        self.min_height = Some(min_height);
        self
    }

    pub fn alpha_threshold(mut self, threshold: u8) -> Self {
        self.alpha_threshold = Some(threshold);
        self
    }

    pub fn merge_tolerance(mut self, tolerance: usize) -> Self {
        self.merge_tolerance = Some(tolerance);
        self
    }

    pub fn max_slots(mut self, max: usize) -> Self {
        self.max_slots = Some(max);
        self
    }

    pub fn min_region_pixels(mut self, pixels: usize) -> Self {
        self.min_region_pixels = Some(pixels);
        self
    }

    pub fn row_band_tolerance(mut self, tolerance: usize) -> Self {
        self.row_band_tolerance = Some(tolerance);
        self
    }

    pub fn aspect_tolerance(mut self, tolerance: f64) -> Self {
        self.aspect_tolerance = Some(tolerance);
        self
    }

    pub fn build(self) -> DetectionConfig {
        let default = DetectionConfig::default();
        DetectionConfig {
            min_width: self.min_width.unwrap_or(default.min_width),
            min_height: self.min_height.unwrap_or(default.min_height),
            alpha_threshold: self.alpha_threshold.unwrap_or(default.alpha_threshold),
            merge_tolerance: self.merge_tolerance.unwrap_or(default.merge_tolerance),
            max_slots: self.max_slots.unwrap_or(default.max_slots),
            min_region_pixels: self.min_region_pixels.unwrap_or(default.min_region_pixels),
            row_band_tolerance: self.row_band_tolerance.unwrap_or(default.row_band_tolerance),
            aspect_tolerance: self.aspect_tolerance.unwrap_or(default.aspect_tolerance),
        }
    }
}

/// Per-stage counts from one detection run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetectionStats {
    /// Regions that passed the pixel-count floor
    pub regions: usize,
    /// Rectangles left after consolidation
    pub merged_rectangles: usize,
    /// Rectangles meeting the minimum slot size
    pub qualifying_rectangles: usize,
    /// Qualifying rectangles dropped by the slot limit
    pub truncated: usize,
}

/// Slots together with the stage counts that produced them
#[derive(Debug, Clone, PartialEq)]
pub struct SlotDetection {
    pub slots: Vec<SlotDescriptor>,
    pub stats: DetectionStats,
}
