use tracing::debug;

use crate::slot_detection::detector::DetectionConfig;
use crate::slot_detection::regions::Rectangle;
use crate::slot_detection::slots::aspect::classify_aspect_ratio;
use crate::slot_detection::slots::types::{SLOT_Z_INDEX, SlotDescriptor};

/// True when `rect` is large enough to hold a photo.
pub fn qualifies(rect: &Rectangle, config: &DetectionConfig) -> bool {
    rect.width >= config.min_width && rect.height >= config.min_height
}

/// True when `a` reads before `b`: by `x` when their tops are less than
/// `row_band` apart, otherwise by `y`.
fn reads_before(a: &Rectangle, b: &Rectangle, row_band: usize) -> bool {
    if a.y.abs_diff(b.y) < row_band {
        (a.x, a.y) < (b.x, b.y)
    } else {
        a.y < b.y
    }
}

/// Sorts rectangles top-to-bottom, then left-to-right within a row.
///
/// Two rectangles share a row when their tops are less than `row_band` apart.
/// That relation is not transitive, so rectangles are first chained into
/// bands: after sorting by `(y, x)`, a rectangle joins the current band when
/// its top is within `row_band` of the previous one. Tops in different bands
/// are always at least `row_band` apart. Inside a band, the next rectangle is
/// the first one that no remaining rectangle reads before, which keeps every
/// pair in row order whenever such an order exists.
pub fn sort_reading_order(rectangles: &mut [Rectangle], row_band: usize) {
    rectangles.sort_by_key(|r| (r.y, r.x));

    let mut start = 0;
    while start < rectangles.len() {
        let mut end = start + 1;
        while end < rectangles.len() && rectangles[end].y - rectangles[end - 1].y < row_band {
            end += 1;
        }

        order_band(&mut rectangles[start..end], row_band);
        start = end;
    }
}

fn order_band(band: &mut [Rectangle], row_band: usize) {
    for next in 0..band.len() {
        let remaining = &band[next..];
        // a cycle leaves no unbeaten rectangle; fall back to the topmost
        let pick = (0..remaining.len())
            .find(|&i| {
                !remaining
                    .iter()
                    .enumerate()
                    .any(|(j, other)| j != i && reads_before(other, &remaining[i], row_band))
            })
            .unwrap_or(0);

        band[next..=next + pick].rotate_right(1);
    }
}

/// Filters, orders, truncates and normalizes consolidated rectangles into slot
/// descriptors for an `image_width` x `image_height` frame.
pub fn build_slots(
    rectangles: Vec<Rectangle>,
    image_width: usize,
    image_height: usize,
    config: &DetectionConfig,
) -> Vec<SlotDescriptor> {
    if image_width == 0 || image_height == 0 {
        return Vec::new();
    }

    let mut candidates: Vec<Rectangle> = rectangles
        .into_iter()
        .filter(|rect| qualifies(rect, config))
        .collect();

    sort_reading_order(&mut candidates, config.row_band_tolerance);

    if candidates.len() > config.max_slots {
        debug!(
            found = candidates.len(),
            max_slots = config.max_slots,
            "Dropping slots beyond the limit"
        );
        candidates.truncate(config.max_slots);
    }

    let frame_width = image_width as f64;
    let frame_height = image_height as f64;

    candidates
        .iter()
        .enumerate()
        .map(|(index, rect)| SlotDescriptor {
            id: format!("slot_{}", index + 1),
            left: rect.x as f64 / frame_width,
            top: rect.y as f64 / frame_height,
            width: rect.width as f64 / frame_width,
            height: rect.height as f64 / frame_height,
            aspect_ratio: classify_aspect_ratio(rect.width, rect.height, config.aspect_tolerance),
            z_index: SLOT_Z_INDEX,
            photo_index: index,
        })
        .collect()
}
