//! Slot descriptor types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Compositing order of every slot, directly above the frame background
pub const SLOT_Z_INDEX: u32 = 2;

/// Canonical width:height ratios a slot can be displayed and cropped at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "4:5")]
    Portrait4x5,
    #[serde(rename = "3:4")]
    Portrait3x4,
    #[serde(rename = "16:9")]
    Wide16x9,
    #[serde(rename = "4:3")]
    Landscape4x3,
}

impl AspectRatio {
    /// Classification order; earlier entries win when two are within tolerance.
    pub const CANONICAL: [AspectRatio; 5] = [
        AspectRatio::Square,
        AspectRatio::Portrait4x5,
        AspectRatio::Portrait3x4,
        AspectRatio::Wide16x9,
        AspectRatio::Landscape4x3,
    ];

    pub fn value(self) -> f64 {
        match self {
            AspectRatio::Square => 1.0,
            AspectRatio::Portrait4x5 => 4.0 / 5.0,
            AspectRatio::Portrait3x4 => 3.0 / 4.0,
            AspectRatio::Wide16x9 => 16.0 / 9.0,
            AspectRatio::Landscape4x3 => 4.0 / 3.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Portrait4x5 => "4:5",
            AspectRatio::Portrait3x4 => "3:4",
            AspectRatio::Wide16x9 => "16:9",
            AspectRatio::Landscape4x3 => "4:3",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A detected photo placement, in coordinates relative to the frame size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotDescriptor {
    /// `slot_{n}`, 1-based in reading order
    pub id: String,
    /// Left edge as a fraction of the frame width
    pub left: f64,
    /// Top edge as a fraction of the frame height
    pub top: f64,
    /// Width as a fraction of the frame width
    pub width: f64,
    /// Height as a fraction of the frame height
    pub height: f64,
    pub aspect_ratio: AspectRatio,
    pub z_index: u32,
    /// 0-based position in reading order
    pub photo_index: usize,
}
