//! 2D line segment type.

use super::Point2;
use crate::bounds::Aabb2;
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
///
/// Used both for polygon boundary edges and for candidate join lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self {
            start: Point2::new(x1, y1),
            end: Point2::new(x2, y2),
        }
    }

    /// Returns the length of the segment.
    #[inline]
    pub fn length(self) -> F {
        self.start.distance(self.end)
    }

    /// Returns the reversed segment (start and end swapped).
    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Returns `true` if both endpoints are exactly equal.
    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.start == self.end
    }

    /// Returns the axis-aligned bounding box of the segment.
    #[inline]
    pub fn bounds(self) -> Aabb2<F> {
        Aabb2::from_corners(self.start, self.end)
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_length() {
        let s: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 3.0, 4.0);
        assert_relative_eq!(s.length(), 5.0);
    }

    #[test]
    fn test_reversed() {
        let s: Segment2<f64> = Segment2::from_coords(0.0, 1.0, 2.0, 3.0);
        let r = s.reversed();
        assert_eq!(r.start, s.end);
        assert_eq!(r.end, s.start);
    }

    #[test]
    fn test_degenerate() {
        let p = Point2::new(2.0_f64, 5.0);
        assert!(Segment2::new(p, p).is_degenerate());
        assert!(!Segment2::from_coords(0.0_f64, 0.0, 0.0, 1e-12).is_degenerate());
    }

    #[test]
    fn test_bounds_any_direction() {
        let s: Segment2<f64> = Segment2::from_coords(4.0, 1.0, 0.0, 3.0);
        let b = s.bounds();
        assert_eq!(b.min, Point2::new(0.0, 1.0));
        assert_eq!(b.max, Point2::new(4.0, 3.0));
    }
}
