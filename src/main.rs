use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use frame_slot_detector::logger;
use frame_slot_detector::slot_detection::{DetectionConfig, FrameSlotPipeline, PipelineConfig};

use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "frame_slot_detector")]
#[command(version, about = "Detect photo slots in a frame image", long_about = None)]
struct Cli {
    /// Frame image (PNG or TIFF with an alpha channel)
    #[arg(value_name = "FRAME")]
    input: PathBuf,

    /// Maximum number of slots to emit
    #[arg(long, value_name = "N")]
    max_slots: Option<usize>,

    /// Pixels with alpha below this value are transparent
    #[arg(long, value_name = "ALPHA")]
    alpha_threshold: Option<u8>,

    /// Pixel distance within which rectangles are merged
    #[arg(long, value_name = "PX")]
    merge_tolerance: Option<usize>,

    /// Minimum slot width in pixels
    #[arg(long, value_name = "PX")]
    min_width: Option<usize>,

    /// Minimum slot height in pixels
    #[arg(long, value_name = "PX")]
    min_height: Option<usize>,
}

impl Cli {
    fn detection_config(&self) -> DetectionConfig {
        let mut builder = DetectionConfig::builder();
        if let Some(max) = self.max_slots {
            builder = builder.max_slots(max);
        }
        if let Some(threshold) = self.alpha_threshold {
            builder = builder.alpha_threshold(threshold);
        }
        if let Some(tolerance) = self.merge_tolerance {
            builder = builder.merge_tolerance(tolerance);
        }
        if let Some(width) = self.min_width {
            builder = builder.min_width(width);
        }
        if let Some(height) = self.min_height {
            builder = builder.min_height(height);
        }
        builder.build()
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init();

    let config = PipelineConfig::builder()
        .detection(cli.detection_config())
        .build();
    let pipeline = FrameSlotPipeline::new(config);

    info!("Max slots: {}", pipeline.config().detection.max_slots);
    info!("Alpha threshold: {}", pipeline.config().detection.alpha_threshold);

    let slots = pipeline
        .detect_file(&cli.input)
        .with_context(|| format!("slot detection failed for {}", cli.input.display()))?;

    if slots.is_empty() {
        warn!("No slots detected, slots must be placed manually");
    }

    println!("{}", serde_json::to_string_pretty(&slots)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_feed_detection_config() {
        let cli = Cli::try_parse_from([
            "frame_slot_detector",
            "frame.png",
            "--max-slots",
            "4",
            "--alpha-threshold",
            "10",
            "--min-height",
            "120",
        ])
        .unwrap();

        let config = cli.detection_config();
        assert_eq!(cli.input, PathBuf::from("frame.png"));
        assert_eq!(config.max_slots, 4);
        assert_eq!(config.alpha_threshold, 10);
        assert_eq!(config.min_height, 120);
        assert_eq!(config.min_width, DetectionConfig::default().min_width);
        assert_eq!(config.merge_tolerance, 15);
    }

    #[test]
    fn test_unset_flags_keep_defaults() {
        let cli = Cli::try_parse_from(["frame_slot_detector", "frame.tiff"]).unwrap();
        assert_eq!(cli.detection_config(), DetectionConfig::default());
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(Cli::try_parse_from(["frame_slot_detector"]).is_err());
        assert!(Cli::try_parse_from(["frame_slot_detector", "f.png", "--alpha-threshold", "300"]).is_err());
        assert!(Cli::try_parse_from(["frame_slot_detector", "f.png", "--bogus"]).is_err());
    }
}
