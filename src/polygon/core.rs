//! Core ring and polygon types.

use crate::bounds::Aabb2;
use crate::error::JoinError;
use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// A closed ring of coordinates.
///
/// The first and last coordinates are identical. A ring has at least four
/// coordinates (three distinct vertices plus the closing one) and every
/// ordinate is finite. No other validity (simplicity, orientation) is
/// checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring<F> {
    coords: Vec<Point2<F>>,
}

impl<F: Float> Ring<F> {
    /// Creates a ring from an explicitly closed coordinate sequence.
    pub fn new(coords: Vec<Point2<F>>) -> Result<Self, JoinError> {
        if coords.len() < 4 {
            return Err(JoinError::TooFewCoordinates {
                count: coords.len(),
            });
        }
        if let Some(index) = coords.iter().position(|p| !p.is_finite()) {
            return Err(JoinError::NonFiniteCoordinate { index });
        }
        if coords.first() != coords.last() {
            return Err(JoinError::RingNotClosed);
        }
        Ok(Self { coords })
    }

    /// Creates a ring from open vertices, appending the closing coordinate.
    ///
    /// If the sequence is already closed it is used as is.
    pub fn from_open(mut vertices: Vec<Point2<F>>) -> Result<Self, JoinError> {
        if let (Some(&first), Some(&last)) = (vertices.first(), vertices.last()) {
            if vertices.len() < 2 || first != last {
                vertices.push(first);
            }
        }
        Self::new(vertices)
    }

    /// Returns the coordinates, including the closing one.
    #[inline]
    pub fn coords(&self) -> &[Point2<F>] {
        &self.coords
    }

    /// Returns the number of coordinates, including the closing one.
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Returns true if the ring has no coordinates. Never true for a ring
    /// built through [`Ring::new`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Returns the number of distinct vertices (closing coordinate excluded).
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.coords.len() - 1
    }

    /// Consumes the ring and returns its coordinates.
    pub fn into_coords(self) -> Vec<Point2<F>> {
        self.coords
    }

    /// Returns the ring's envelope.
    pub fn envelope(&self) -> Aabb2<F> {
        let first = Aabb2::from_point(self.coords[0]);
        self.coords[1..]
            .iter()
            .fold(first, |acc, &p| acc.expand_to_include(p))
    }

    /// Returns the signed area. Positive for CCW winding, negative for CW.
    pub fn signed_area(&self) -> F {
        ring_signed_area(&self.coords)
    }

    /// Returns `true` if the ring winds counter-clockwise.
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > F::zero()
    }

    /// Returns the ring with reversed winding.
    pub fn reversed(&self) -> Self {
        let mut coords = self.coords.clone();
        coords.reverse();
        Self { coords }
    }

    /// Iterates over the ring's edges.
    pub fn segments(&self) -> impl Iterator<Item = Segment2<F>> + '_ {
        self.coords.windows(2).map(|w| Segment2::new(w[0], w[1]))
    }
}

/// A polygon: one shell ring and zero or more hole rings.
///
/// Holes are expected to lie inside the shell and not to overlap each other,
/// but this is not checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<F> {
    shell: Ring<F>,
    holes: Vec<Ring<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a polygon from a shell and holes.
    pub fn new(shell: Ring<F>, holes: Vec<Ring<F>>) -> Self {
        Self { shell, holes }
    }

    /// Creates a polygon without holes.
    pub fn from_shell(shell: Ring<F>) -> Self {
        Self {
            shell,
            holes: Vec::new(),
        }
    }

    /// Returns the exterior ring.
    #[inline]
    pub fn shell(&self) -> &Ring<F> {
        &self.shell
    }

    /// Returns the interior rings.
    #[inline]
    pub fn holes(&self) -> &[Ring<F>] {
        &self.holes
    }

    /// Returns the `n`th interior ring, if any.
    #[inline]
    pub fn interior_ring(&self, n: usize) -> Option<&Ring<F>> {
        self.holes.get(n)
    }

    #[inline]
    pub fn num_holes(&self) -> usize {
        self.holes.len()
    }

    #[inline]
    pub fn has_holes(&self) -> bool {
        !self.holes.is_empty()
    }

    /// Returns the sum of the signed areas of all rings.
    ///
    /// For a conventionally oriented polygon (CCW shell, CW holes) this is
    /// the enclosed area.
    pub fn signed_area(&self) -> F {
        self.holes
            .iter()
            .fold(self.shell.signed_area(), |acc, h| acc + h.signed_area())
    }

    /// Returns the shell area minus the hole areas, ignoring winding.
    pub fn area(&self) -> F {
        self.holes
            .iter()
            .fold(self.shell.signed_area().abs(), |acc, h| {
                acc - h.signed_area().abs()
            })
    }

    /// Iterates over every boundary edge: shell first, then each hole.
    pub fn segments(&self) -> impl Iterator<Item = Segment2<F>> + '_ {
        self.shell
            .segments()
            .chain(self.holes.iter().flat_map(Ring::segments))
    }

    /// Returns a copy with a CCW shell and CW holes.
    pub fn oriented(&self) -> Self {
        let orient = |ring: &Ring<F>, ccw: bool| {
            if ring.is_ccw() == ccw {
                ring.clone()
            } else {
                ring.reversed()
            }
        };
        Self {
            shell: orient(&self.shell, true),
            holes: self.holes.iter().map(|h| orient(h, false)).collect(),
        }
    }
}

/// Computes the signed area of a ring using the shoelace formula.
///
/// Accepts closed or open coordinate sequences; the closing edge
/// contributes nothing when the sequence is already closed. Positive for
/// CCW winding, negative for CW winding.
pub fn ring_signed_area<F: Float>(coords: &[Point2<F>]) -> F {
    if coords.len() < 3 {
        return F::zero();
    }

    let n = coords.len();
    let twice = (0..n).fold(F::zero(), |acc, i| {
        let j = (i + 1) % n;
        acc + coords[i].x * coords[j].y - coords[j].x * coords[i].y
    });

    twice / (F::one() + F::one())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2<f64>> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    fn square(x0: f64, y0: f64, size: f64) -> Ring<f64> {
        Ring::from_open(pts(&[
            (x0, y0),
            (x0 + size, y0),
            (x0 + size, y0 + size),
            (x0, y0 + size),
        ]))
        .unwrap()
    }

    #[test]
    fn test_ring_new_closed() {
        let ring = Ring::new(pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)])).unwrap();
        assert_eq!(ring.len(), 4);
        assert_eq!(ring.num_vertices(), 3);
        assert!(!ring.is_empty());
    }

    #[test]
    fn test_ring_new_not_closed() {
        let result = Ring::new(pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]));
        assert_eq!(result, Err(JoinError::RingNotClosed));
    }

    #[test]
    fn test_ring_new_too_few() {
        let result = Ring::new(pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 0.0)]));
        assert_eq!(result, Err(JoinError::TooFewCoordinates { count: 3 }));
    }

    #[test]
    fn test_ring_new_non_finite() {
        let result = Ring::new(pts(&[
            (0.0, 0.0),
            (1.0, f64::NAN),
            (1.0, 1.0),
            (0.0, 0.0),
        ]));
        assert_eq!(result, Err(JoinError::NonFiniteCoordinate { index: 1 }));
    }

    #[test]
    fn test_ring_from_open_appends_closing() {
        let ring = Ring::from_open(pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)])).unwrap();
        assert_eq!(ring.len(), 4);
        assert_eq!(ring.coords()[3], Point2::new(0.0, 0.0));
    }

    #[test]
    fn test_ring_from_open_keeps_closed() {
        let closed = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]);
        let ring = Ring::from_open(closed.clone()).unwrap();
        assert_eq!(ring.coords(), closed.as_slice());
    }

    #[test]
    fn test_ring_from_open_empty() {
        let result = Ring::<f64>::from_open(vec![]);
        assert_eq!(result, Err(JoinError::TooFewCoordinates { count: 0 }));
    }

    #[test]
    fn test_ring_envelope() {
        let ring = Ring::from_open(pts(&[(1.0, 2.0), (3.0, 1.0), (4.0, 3.0), (2.0, 4.0)])).unwrap();
        let env = ring.envelope();
        assert_eq!(env.min, Point2::new(1.0, 1.0));
        assert_eq!(env.max, Point2::new(4.0, 4.0));
    }

    #[test]
    fn test_ring_signed_area_and_winding() {
        let ring = square(0.0, 0.0, 2.0);
        assert_relative_eq!(ring.signed_area(), 4.0);
        assert!(ring.is_ccw());
        let rev = ring.reversed();
        assert_relative_eq!(rev.signed_area(), -4.0);
        assert!(!rev.is_ccw());
    }

    #[test]
    fn test_ring_segments() {
        let ring = square(0.0, 0.0, 1.0);
        let segs: Vec<_> = ring.segments().collect();
        assert_eq!(segs.len(), 4);
        assert_eq!(segs[0], Segment2::from_coords(0.0, 0.0, 1.0, 0.0));
        assert_eq!(segs[3], Segment2::from_coords(0.0, 1.0, 0.0, 0.0));
    }

    #[test]
    fn test_polygon_accessors() {
        let poly = Polygon::new(square(0.0, 0.0, 10.0), vec![square(2.0, 2.0, 1.0)]);
        assert!(poly.has_holes());
        assert_eq!(poly.num_holes(), 1);
        assert!(poly.interior_ring(0).is_some());
        assert!(poly.interior_ring(1).is_none());
        assert_eq!(poly.segments().count(), 8);

        let plain = Polygon::from_shell(square(0.0, 0.0, 1.0));
        assert!(!plain.has_holes());
    }

    #[test]
    fn test_polygon_areas() {
        let poly = Polygon::new(
            square(0.0, 0.0, 10.0),
            vec![square(2.0, 2.0, 1.0).reversed(), square(5.0, 5.0, 2.0).reversed()],
        );
        assert_relative_eq!(poly.signed_area(), 95.0);
        assert_relative_eq!(poly.area(), 95.0);
    }

    #[test]
    fn test_polygon_oriented() {
        let poly = Polygon::new(
            square(0.0, 0.0, 10.0).reversed(),
            vec![square(2.0, 2.0, 1.0)],
        );
        assert_relative_eq!(poly.signed_area(), -99.0);

        let oriented = poly.oriented();
        assert!(oriented.shell().is_ccw());
        assert!(!oriented.holes()[0].is_ccw());
        assert_relative_eq!(oriented.signed_area(), 99.0);
        assert_relative_eq!(oriented.area(), poly.area());
    }

    #[test]
    fn test_ring_signed_area_open_and_closed_agree() {
        let open = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0)]);
        let mut closed = open.clone();
        closed.push(open[0]);
        assert_relative_eq!(ring_signed_area(&open), 6.0);
        assert_relative_eq!(ring_signed_area(&closed), 6.0);
    }
}
