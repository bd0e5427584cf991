//! Rectangle consolidation.
//!
//! Anti-aliased edges often split one hole into several regions separated by
//! thin opaque seams. Rectangles whose tolerance-expanded bounds overlap are
//! merged transitively until no pair is nearby.

use tracing::debug;

use crate::slot_detection::regions::rectangle::Rectangle;

/// True when the bounds of `a` and `b`, grown by `tolerance` pixels, overlap on
/// both axes.
pub fn is_nearby(a: &Rectangle, b: &Rectangle, tolerance: usize) -> bool {
    a.x <= b.right().saturating_add(tolerance)
        && a.right().saturating_add(tolerance) >= b.x
        && a.y <= b.bottom().saturating_add(tolerance)
        && a.bottom().saturating_add(tolerance) >= b.y
}

/// One front-to-back pass: every unused rectangle absorbs all nearby unused
/// rectangles, re-testing after each growth, before it is emitted.
pub fn merge_pass(rectangles: &[Rectangle], tolerance: usize) -> Vec<Rectangle> {
    let mut used = vec![false; rectangles.len()];
    let mut merged = Vec::with_capacity(rectangles.len());

    for i in 0..rectangles.len() {
        if used[i] {
            continue;
        }
        used[i] = true;
        let mut current = rectangles[i];

        loop {
            let mut grew = false;
            for j in (i + 1)..rectangles.len() {
                if !used[j] && is_nearby(&current, &rectangles[j], tolerance) {
                    current = current.union(&rectangles[j]);
                    used[j] = true;
                    grew = true;
                }
            }
            if !grew {
                break;
            }
        }

        merged.push(current);
    }

    merged
}

/// Merges nearby rectangles until a full pass performs no merge.
///
/// The result is a fixed point: feeding it back returns the same rectangles.
pub fn merge_nearby(rectangles: Vec<Rectangle>, tolerance: usize) -> Vec<Rectangle> {
    let mut current = rectangles;
    let mut passes = 0usize;

    loop {
        passes += 1;
        let merged = merge_pass(&current, tolerance);
        if merged.len() == current.len() {
            debug!(passes, rectangles = merged.len(), "Rectangle merge converged");
            return merged;
        }
        current = merged;
    }
}
