//! Boundary crossing queries.
//!
//! A join line between a hole vertex and a shell vertex lies inside the
//! polygon exactly when it does not properly cross the polygon boundary.
//! The engines here are built once from the original boundary and answer
//! that question for any number of candidate segments.
//!
//! # Example
//!
//! ```
//! use keyhole::crossing::{BoundaryCrossing, IndexedBoundaryIntersector};
//! use keyhole::polygon::{Polygon, Ring};
//! use keyhole::{Point2, Segment2};
//!
//! let shell = Ring::from_open(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.0, 10.0),
//!     Point2::new(0.0, 10.0),
//! ]).unwrap();
//! let polygon = Polygon::from_shell(shell);
//! let boundary = IndexedBoundaryIntersector::new(&polygon);
//!
//! // Touching the boundary at a vertex is not a crossing
//! assert!(!boundary.properly_crosses(Segment2::from_coords(5.0, 5.0, 0.0, 10.0)));
//! // Leaving the polygon through an edge is
//! assert!(boundary.properly_crosses(Segment2::from_coords(5.0, 5.0, 15.0, 5.0)));
//! ```

mod indexed;
mod simple;

pub use indexed::{IndexedBoundaryIntersector, DEFAULT_LEAF_SIZE};
pub use simple::SimpleBoundaryIntersector;

use crate::primitives::Segment2;

/// Answers whether a segment properly crosses a fixed boundary.
///
/// A proper crossing meets a boundary segment at a point interior to both
/// segments; touching at an endpoint or running collinear does not count.
/// Implementations are read-only and may be queried any number of times.
pub trait BoundaryCrossing<F> {
    /// Returns `true` if `segment` properly crosses any boundary segment.
    fn properly_crosses(&self, segment: Segment2<F>) -> bool;
}

impl<F, T: BoundaryCrossing<F> + ?Sized> BoundaryCrossing<F> for &T {
    fn properly_crosses(&self, segment: Segment2<F>) -> bool {
        (**self).properly_crosses(segment)
    }
}
