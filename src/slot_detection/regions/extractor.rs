//! Connected-component extraction over the alpha mask.
//!
//! Flood fill runs on an explicit stack and records visited pixels in a dense
//! bitmap indexed by `y * width + x`, so every pixel is tested at most once per
//! extraction. A fill keeps only the running extent and pixel count of its
//! component; member coordinates are never stored.

use bitvec::vec::BitVec;
use tracing::{debug, trace};

use crate::slot_detection::common::error::{DetectionError, Result};
use crate::slot_detection::pixel::{Coordinate, PixelBuffer, is_transparent};

/// Dense visited bitmap, one bit per pixel.
#[derive(Debug, Clone)]
pub struct VisitedMap {
    bits: BitVec,
}

impl VisitedMap {
    pub fn new(pixel_count: usize) -> Self {
        Self {
            bits: BitVec::repeat(false, pixel_count),
        }
    }

    pub fn for_buffer(buffer: &PixelBuffer<'_>) -> Self {
        Self::new(buffer.pixel_count())
    }

    #[inline]
    pub fn is_visited(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// Marks `index` visited and returns whether it already was.
    #[inline]
    pub fn mark(&mut self, index: usize) -> bool {
        self.bits.replace(index, true)
    }

    pub fn visited_count(&self) -> usize {
        self.bits.count_ones()
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }
}

/// A maximal 4-connected set of transparent pixels, kept as its extent and
/// pixel count only. Never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    min: Coordinate,
    max: Coordinate,
    pixel_count: usize,
}

impl Region {
    fn start(seed: Coordinate) -> Self {
        Self {
            min: seed,
            max: seed,
            pixel_count: 1,
        }
    }

    fn include(&mut self, c: Coordinate) {
        self.min.x = self.min.x.min(c.x);
        self.min.y = self.min.y.min(c.y);
        self.max.x = self.max.x.max(c.x);
        self.max.y = self.max.y.max(c.y);
        self.pixel_count += 1;
    }

    /// Builds a region from an explicit pixel list; `None` when the list is empty.
    pub fn from_pixels(pixels: &[Coordinate]) -> Option<Self> {
        let (&first, rest) = pixels.split_first()?;
        let mut region = Region::start(first);
        for &c in rest {
            region.include(c);
        }
        Some(region)
    }

    /// Top-left-most pixel coordinates covered
    pub fn min(&self) -> Coordinate {
        self.min
    }

    /// Bottom-right-most pixel coordinates covered, inclusive
    pub fn max(&self) -> Coordinate {
        self.max
    }

    pub fn pixel_count(&self) -> usize {
        self.pixel_count
    }
}

/// Flood-fills the transparent component containing `seed`.
///
/// Returns `Ok(None)` when the seed was already visited or is opaque, and
/// `DetectionError::OutOfBounds` when the seed lies outside the buffer.
/// `visited` must have been created for this buffer.
pub fn flood_fill(
    buffer: &PixelBuffer<'_>,
    visited: &mut VisitedMap,
    seed: Coordinate,
    alpha_threshold: u8,
) -> Result<Option<Region>> {
    if !buffer.contains(seed.x, seed.y) {
        return Err(DetectionError::OutOfBounds {
            x: seed.x,
            y: seed.y,
            width: buffer.width(),
            height: buffer.height(),
        });
    }
    if visited.len() != buffer.pixel_count() {
        return Err(DetectionError::BufferSizeMismatch {
            expected: buffer.pixel_count(),
            actual: visited.len(),
        });
    }

    Ok(fill_from(buffer, visited, seed, alpha_threshold))
}

fn fill_from(
    buffer: &PixelBuffer<'_>,
    visited: &mut VisitedMap,
    seed: Coordinate,
    alpha_threshold: u8,
) -> Option<Region> {
    if visited.mark(buffer.index(seed.x, seed.y))
        || !is_transparent(buffer, seed.x, seed.y, alpha_threshold)
    {
        return None;
    }

    let mut region = Region::start(seed);
    let mut stack = vec![seed];

    while let Some(current) = stack.pop() {
        for next in neighbors(current, buffer.width(), buffer.height()) {
            if !visited.mark(buffer.index(next.x, next.y))
                && is_transparent(buffer, next.x, next.y, alpha_threshold)
            {
                region.include(next);
                stack.push(next);
            }
        }
    }

    Some(region)
}

fn neighbors(c: Coordinate, width: usize, height: usize) -> impl Iterator<Item = Coordinate> {
    [
        (c.x > 0).then(|| Coordinate::new(c.x - 1, c.y)),
        (c.x + 1 < width).then(|| Coordinate::new(c.x + 1, c.y)),
        (c.y > 0).then(|| Coordinate::new(c.x, c.y - 1)),
        (c.y + 1 < height).then(|| Coordinate::new(c.x, c.y + 1)),
    ]
    .into_iter()
    .flatten()
}

/// Scans the buffer in row-major order and returns every transparent region
/// holding at least `min_region_pixels` pixels, in discovery order.
pub fn extract_regions(
    buffer: &PixelBuffer<'_>,
    alpha_threshold: u8,
    min_region_pixels: usize,
) -> Vec<Region> {
    if buffer.is_empty() {
        return Vec::new();
    }

    let mut visited = VisitedMap::for_buffer(buffer);
    let mut regions = Vec::new();
    let mut discarded = 0usize;

    for y in 0..buffer.height() {
        for x in 0..buffer.width() {
            if visited.is_visited(buffer.index(x, y)) {
                continue;
            }

            let Some(region) = fill_from(buffer, &mut visited, Coordinate::new(x, y), alpha_threshold)
            else {
                continue;
            };

            if region.pixel_count() >= min_region_pixels {
                trace!(x, y, pixels = region.pixel_count(), "Region found");
                regions.push(region);
            } else {
                discarded += 1;
            }
        }
    }

    debug!(
        kept = regions.len(),
        discarded,
        "Region extraction complete"
    );
    regions
}
