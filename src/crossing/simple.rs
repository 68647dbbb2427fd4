//! Brute-force boundary crossing engine.

use super::BoundaryCrossing;
use crate::polygon::Polygon;
use crate::primitives::Segment2;
use crate::tolerance::segments_cross_properly;
use num_traits::Float;

/// Tests a segment against every boundary segment.
///
/// O(n) per query. Useful for small polygons and as a reference for the
/// indexed engine.
#[derive(Debug, Clone)]
pub struct SimpleBoundaryIntersector<F> {
    segments: Vec<Segment2<F>>,
}

impl<F: Float> SimpleBoundaryIntersector<F> {
    pub fn new(polygon: &Polygon<F>) -> Self {
        Self {
            segments: polygon.segments().collect(),
        }
    }

    pub fn from_segments(segments: Vec<Segment2<F>>) -> Self {
        Self { segments }
    }
}

impl<F: Float> BoundaryCrossing<F> for SimpleBoundaryIntersector<F> {
    fn properly_crosses(&self, segment: Segment2<F>) -> bool {
        self.segments
            .iter()
            .any(|&edge| segments_cross_properly(segment, edge))
    }
}
