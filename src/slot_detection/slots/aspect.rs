use crate::slot_detection::slots::types::AspectRatio;

/// Maps a `width` x `height` box to a canonical aspect ratio.
///
/// Canonical ratios are tried in `AspectRatio::CANONICAL` order and the first
/// one within `tolerance` of `width / height` wins. Boxes matching none fall
/// back to 4:5 when portrait and 16:9 otherwise.
pub fn classify_aspect_ratio(width: usize, height: usize, tolerance: f64) -> AspectRatio {
    let ratio = width as f64 / height as f64;

    AspectRatio::CANONICAL
        .into_iter()
        .find(|candidate| (ratio - candidate.value()).abs() < tolerance)
        .unwrap_or(if ratio < 1.0 {
            AspectRatio::Portrait4x5
        } else {
            AspectRatio::Wide16x9
        })
}
