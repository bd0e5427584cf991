//! Pipeline configuration types

use crate::slot_detection::detector::DetectionConfig;

/// Configuration for decoding and detecting slots in a frame file
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Parameters handed to the slot detector
    pub detection: DetectionConfig,
    /// Whether to validate image dimensions before detection
    pub validate_dimensions: bool,
    /// Largest accepted width or height, bounding detection latency
    pub max_dimension: Option<usize>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            detection: DetectionConfig::default(),
            validate_dimensions: true,
            max_dimension: Some(16384),
        }
    }
}

impl PipelineConfig {
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }
}

/// Builder for PipelineConfig
#[derive(Default)]
pub struct PipelineConfigBuilder {
    detection: Option<DetectionConfig>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
}

impl PipelineConfigBuilder {
    pub fn detection(mut self, detection: DetectionConfig) -> Self {
        self.detection = Some(detection);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> PipelineConfig {
        let default = PipelineConfig::default();
        PipelineConfig {
            detection: self.detection.unwrap_or(default.detection),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
