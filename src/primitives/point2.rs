//! 2D point type.

use num_traits::Float;
use std::cmp::Ordering;

/// A 2D point (polygon vertex).
///
/// Generic over floating-point types (`f32` or `f64`). The derived
/// `PartialEq` is exact field equality; [`Point2::near_equals`] is the
/// tolerant comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Returns the squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Returns the distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }

    /// Returns the midpoint between this point and another.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        let two = F::one() + F::one();
        Self {
            x: (self.x + other.x) / two,
            y: (self.y + other.y) / two,
        }
    }

    /// Returns `true` if both ordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Tests equality within an absolute tolerance on each axis.
    ///
    /// Both `|dx| <= eps` and `|dy| <= eps` must hold.
    #[inline]
    pub fn near_equals(self, other: Self, eps: F) -> bool {
        (self.x - other.x).abs() <= eps && (self.y - other.y).abs() <= eps
    }

    /// Compares two points lexicographically by x, then y, exactly.
    ///
    /// NaN ordinates compare equal to everything, so callers that need a
    /// total order must keep NaN out (rings reject it at construction).
    #[inline]
    pub fn cmp_xy(&self, other: &Self) -> Ordering {
        self.x
            .partial_cmp(&other.x)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.y.partial_cmp(&other.y).unwrap_or(Ordering::Equal))
    }

    /// Converts the ordinates to `f64`, mapping unrepresentable values to NaN.
    pub fn to_f64(self) -> (f64, f64) {
        (
            self.x.to_f64().unwrap_or(f64::NAN),
            self.y.to_f64().unwrap_or(f64::NAN),
        )
    }
}

impl<F: Float> From<(F, F)> for Point2<F> {
    fn from((x, y): (F, F)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert_relative_eq!(a.distance(b), 5.0);
        assert_relative_eq!(a.distance_squared(b), 25.0);
    }

    #[test]
    fn test_midpoint() {
        let m = Point2::new(0.0_f64, 2.0).midpoint(Point2::new(4.0, 6.0));
        assert_eq!(m, Point2::new(2.0, 4.0));
    }

    #[test]
    fn test_cmp_xy_orders_x_first() {
        let a: Point2<f64> = Point2::new(1.0, 9.0);
        let b = Point2::new(2.0, 0.0);
        assert_eq!(a.cmp_xy(&b), Ordering::Less);
        assert_eq!(b.cmp_xy(&a), Ordering::Greater);
    }

    #[test]
    fn test_cmp_xy_ties_on_y() {
        let a: Point2<f64> = Point2::new(1.0, 2.0);
        let b = Point2::new(1.0, 3.0);
        assert_eq!(a.cmp_xy(&b), Ordering::Less);
        assert_eq!(a.cmp_xy(&a), Ordering::Equal);
    }

    #[test]
    fn test_cmp_xy_is_exact() {
        let a: Point2<f64> = Point2::new(1.0, 2.0);
        let b = Point2::new(1.0 + 1e-12, 2.0);
        assert_eq!(a.cmp_xy(&b), Ordering::Less);
        assert_ne!(a, b);
    }

    #[test]
    fn test_near_equals() {
        let a: Point2<f64> = Point2::new(1.0, 1.0);
        assert!(a.near_equals(Point2::new(1.00005, 0.99995), 1e-4));
        assert!(!a.near_equals(Point2::new(1.0002, 1.0), 1e-4));
        assert!(!a.near_equals(Point2::new(1.0, 1.0002), 1e-4));
    }

    #[test]
    fn test_signed_zero_is_equal() {
        assert_eq!(Point2::new(0.0_f64, 0.0), Point2::new(-0.0, 0.0));
    }

    #[test]
    fn test_is_finite() {
        assert!(Point2::new(1.0_f64, 2.0).is_finite());
        assert!(!Point2::new(f64::NAN, 2.0).is_finite());
        assert!(!Point2::new(1.0, f64::INFINITY).is_finite());
    }
}
