//! Chunk-acceptance predicates.
//!
//! Filtering at this level lets callers pull text for several regions of
//! the same page out of one accumulation, without running the content
//! stream interpreter again.

use crate::chunk::TextChunk;
use crate::geometry::{LineSegment, Rect};

/// Decides whether a [`TextChunk`] takes part in text synthesis.
///
/// Any `Fn(&TextChunk) -> bool` closure is a `ChunkFilter`.
pub trait ChunkFilter {
    /// Return true to keep the chunk.
    fn accept(&self, chunk: &TextChunk) -> bool;
}

impl<F> ChunkFilter for F
where
    F: Fn(&TextChunk) -> bool,
{
    fn accept(&self, chunk: &TextChunk) -> bool {
        self(chunk)
    }
}

/// How a chunk's baseline is tested against a [`RegionFilter`] region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FilterMode {
    /// Midpoint of the baseline falls within the region.
    #[default]
    Crop,
    /// Whole baseline contained within the region.
    Within,
    /// Baseline bounds have no overlap with the region.
    Outside,
}

/// Accepts chunks by the position of their baseline relative to a region.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionFilter {
    pub region: Rect,
    pub mode: FilterMode,
}

impl RegionFilter {
    pub fn new(region: Rect, mode: FilterMode) -> Self {
        Self { region, mode }
    }

    /// Keep chunks whose baseline midpoint lies in `region`.
    pub fn crop(region: Rect) -> Self {
        Self::new(region, FilterMode::Crop)
    }

    /// Keep chunks whose baseline lies entirely in `region`.
    pub fn within(region: Rect) -> Self {
        Self::new(region, FilterMode::Within)
    }

    /// Keep chunks whose baseline does not touch the interior of `region`.
    pub fn outside(region: Rect) -> Self {
        Self::new(region, FilterMode::Outside)
    }
}

impl ChunkFilter for RegionFilter {
    fn accept(&self, chunk: &TextChunk) -> bool {
        let baseline = LineSegment::new(chunk.start_location(), chunk.end_location());
        match self.mode {
            FilterMode::Crop => self.region.contains(&baseline.midpoint()),
            FilterMode::Within => self.region.contains_rect(&baseline.bounding_rect()),
            FilterMode::Outside => !self.region.overlaps(&baseline.bounding_rect()),
        }
    }
}
