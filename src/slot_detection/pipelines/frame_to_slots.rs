use std::path::Path;

use tracing::{info, instrument, warn};

use crate::slot_detection::{
    common::error::{DetectionError, Result},
    decoders::{AutoFrameReader, FrameImageReader},
    detector::{SlotDetection, detect_slots_with_stats},
    pipelines::types::PipelineConfig,
    slots::SlotDescriptor,
};

pub struct FrameSlotPipeline<R: FrameImageReader> {
    reader: R,
    config: PipelineConfig,
}

impl FrameSlotPipeline<AutoFrameReader> {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            reader: AutoFrameReader,
            config,
        }
    }
}

impl<R: FrameImageReader> FrameSlotPipeline<R> {
    pub fn with_custom(reader: R, config: PipelineConfig) -> Self {
        Self { reader, config }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(DetectionError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!(width, height, max, "Frame dimensions exceed maximum");
                return Err(DetectionError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Decodes `input_data` and returns the detected slots in reading order.
    pub fn detect(&self, input_data: &[u8]) -> Result<Vec<SlotDescriptor>> {
        Ok(self.detect_with_stats(input_data)?.slots)
    }

    #[instrument(skip(self, input_data), fields(input_size = input_data.len()))]
    pub fn detect_with_stats(&self, input_data: &[u8]) -> Result<SlotDetection> {
        info!("Starting slot detection");

        let frame = {
            let _span = tracing::info_span!("decode_frame").entered();
            self.reader.read_frame(input_data)?
        };

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = frame.width,
                height = frame.height
            ).entered();
            self.validate_dimensions(frame.width, frame.height)?;
        }

        let buffer = frame.as_buffer()?;
        let detection = detect_slots_with_stats(&buffer, &self.config.detection);

        if detection.slots.is_empty() {
            info!(
                width = frame.width,
                height = frame.height,
                "No slots detected"
            );
        } else {
            info!(
                width = frame.width,
                height = frame.height,
                slots = detection.slots.len(),
                "Slot detection complete"
            );
        }
        Ok(detection)
    }

    #[instrument(skip(self, input_path))]
    pub fn detect_file<P: AsRef<Path>>(&self, input_path: P) -> Result<Vec<SlotDescriptor>> {
        let input_path = input_path.as_ref();

        info!(input = %input_path.display(), "Detecting slots in file");

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                DetectionError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        self.detect(&input_data)
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PipelineConfig) {
        self.config = config;
    }
}
