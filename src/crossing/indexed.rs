//! BVH-backed boundary crossing engine.

use super::BoundaryCrossing;
use crate::polygon::Polygon;
use crate::primitives::Segment2;
use crate::spatial::Bvh;
use crate::tolerance::segments_cross_properly;
use num_traits::Float;

/// Leaf size used by [`IndexedBoundaryIntersector::new`].
pub const DEFAULT_LEAF_SIZE: usize = 4;

/// Boundary crossing engine over a bounding volume hierarchy.
///
/// Only boundary segments whose bounding boxes overlap the query segment's
/// box are tested, and the search stops at the first proper crossing.
#[derive(Debug, Clone)]
pub struct IndexedBoundaryIntersector<F> {
    segments: Vec<Segment2<F>>,
    bvh: Bvh<F>,
}

impl<F: Float> IndexedBoundaryIntersector<F> {
    /// Indexes every edge of the polygon's shell and holes.
    pub fn new(polygon: &Polygon<F>) -> Self {
        Self::with_leaf_size(polygon, DEFAULT_LEAF_SIZE)
    }

    /// Indexes the polygon boundary with a custom BVH leaf size.
    pub fn with_leaf_size(polygon: &Polygon<F>, leaf_size: usize) -> Self {
        Self::from_segments(polygon.segments().collect(), leaf_size)
    }

    /// Indexes an arbitrary set of boundary segments.
    pub fn from_segments(segments: Vec<Segment2<F>>, leaf_size: usize) -> Self {
        let bvh = Bvh::build(&segments, leaf_size);
        Self { segments, bvh }
    }

    /// Returns the number of indexed boundary segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl<F: Float> BoundaryCrossing<F> for IndexedBoundaryIntersector<F> {
    fn properly_crosses(&self, segment: Segment2<F>) -> bool {
        let mut crossed = false;
        self.bvh
            .for_each_intersecting(&self.segments, segment.bounds(), |idx| {
                crossed = segments_cross_properly(segment, self.segments[idx]);
                !crossed
            });
        crossed
    }
}
