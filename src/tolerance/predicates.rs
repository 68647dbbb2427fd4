//! Exact orientation and segment crossing predicates.

use crate::primitives::{Point2, Segment2};
use num_traits::Float;
use robust::Coord;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points are counter-clockwise (positive area).
    CounterClockwise,
    /// Points are clockwise (negative area).
    Clockwise,
    /// Points are exactly collinear.
    Collinear,
}

/// Computes the orientation of three points exactly.
///
/// Returns the orientation of the triangle formed by `a`, `b`, `c`:
/// - `CounterClockwise` if `c` is to the left of the line from `a` to `b`
/// - `Clockwise` if `c` is to the right of the line from `a` to `b`
/// - `Collinear` if `c` is on the line
///
/// The sign is evaluated with adaptive-precision arithmetic, so nearly
/// collinear input is classified correctly. Ordinates are widened to `f64`,
/// which is lossless for `f32` and `f64`.
#[inline]
pub fn orientation<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Orientation {
    let det = robust::orient2d(coord(a), coord(b), coord(c));
    if det > 0.0 {
        Orientation::CounterClockwise
    } else if det < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

#[inline]
fn coord<F: Float>(p: Point2<F>) -> Coord<f64> {
    let (x, y) = p.to_f64();
    Coord { x, y }
}

/// Tests whether two segments cross at a point interior to both.
///
/// Endpoint contacts (shared vertices, T-junctions) and collinear overlaps
/// are not proper crossings. Degenerate segments never cross properly.
pub fn segments_cross_properly<F: Float>(s1: Segment2<F>, s2: Segment2<F>) -> bool {
    let o1 = orientation(s1.start, s1.end, s2.start);
    let o2 = orientation(s1.start, s1.end, s2.end);
    if o1 == Orientation::Collinear || o2 == Orientation::Collinear || o1 == o2 {
        return false;
    }

    let o3 = orientation(s2.start, s2.end, s1.start);
    let o4 = orientation(s2.start, s2.end, s1.end);
    o3 != Orientation::Collinear && o4 != Orientation::Collinear && o3 != o4
}
