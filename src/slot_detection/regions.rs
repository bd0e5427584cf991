//! Region extraction and rectangle consolidation module
//!
//! This module groups transparent pixels into connected regions, reduces each
//! region to its bounding rectangle and merges rectangles that belong to the
//! same visual hole.

mod extractor;
mod rectangle;
mod consolidate;


pub use extractor::{Region, VisitedMap, extract_regions, flood_fill};
pub use rectangle::{Rectangle, to_rectangle};
pub use consolidate::{is_nearby, merge_nearby, merge_pass};
