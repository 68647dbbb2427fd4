//! Ordered multiset of working-ring vertices.

use crate::primitives::Point2;
use num_traits::Float;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

/// A point ordered exactly by (x, y), usable as an ordered map key.
#[derive(Debug, Clone, Copy)]
pub(crate) struct VertexKey<F>(pub(crate) Point2<F>);

impl<F: Float> PartialEq for VertexKey<F> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<F: Float> Eq for VertexKey<F> {}

impl<F: Float> PartialOrd for VertexKey<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<F: Float> Ord for VertexKey<F> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp_xy(&other.0)
    }
}

/// Sorted copy of the working ring's vertices.
///
/// Each distinct location is stored once with an occurrence count, so the
/// total count always equals the number of coordinates inserted. Ordering is
/// exact: points that differ by less than the join tolerance are still
/// distinct entries.
#[derive(Debug, Clone)]
pub(crate) struct VertexIndex<F> {
    counts: BTreeMap<VertexKey<F>, usize>,
    len: usize,
}

impl<F: Float> VertexIndex<F> {
    pub(crate) fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
            len: 0,
        }
    }

    pub(crate) fn from_points(points: &[Point2<F>]) -> Self {
        let mut index = Self::new();
        index.extend(points.iter().copied());
        index
    }

    pub(crate) fn insert(&mut self, p: Point2<F>) {
        *self.counts.entry(VertexKey(p)).or_insert(0) += 1;
        self.len += 1;
    }

    pub(crate) fn extend<I: IntoIterator<Item = Point2<F>>>(&mut self, points: I) {
        for p in points {
            self.insert(p);
        }
    }

    /// Total number of stored occurrences.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of occurrences of exactly `p`.
    #[cfg(test)]
    pub(crate) fn count(&self, p: Point2<F>) -> usize {
        self.counts.get(&VertexKey(p)).copied().unwrap_or(0)
    }

    pub(crate) fn first(&self) -> Option<Point2<F>> {
        self.counts.keys().next().map(|k| k.0)
    }

    pub(crate) fn last(&self) -> Option<Point2<F>> {
        self.counts.keys().next_back().map(|k| k.0)
    }

    /// Smallest stored point strictly greater than `p`.
    pub(crate) fn higher(&self, p: Point2<F>) -> Option<Point2<F>> {
        self.counts
            .range((Excluded(VertexKey(p)), Unbounded))
            .next()
            .map(|(k, _)| k.0)
    }

    /// Largest stored point strictly less than `p`.
    pub(crate) fn lower(&self, p: Point2<F>) -> Option<Point2<F>> {
        self.counts
            .range(..VertexKey(p))
            .next_back()
            .map(|(k, _)| k.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    fn square_index() -> VertexIndex<f64> {
        VertexIndex::from_points(&[p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0), p(0.0, 10.0), p(0.0, 0.0)])
    }

    #[test]
    fn test_counts_duplicates() {
        let index = square_index();
        assert_eq!(index.len(), 5);
        assert!(!index.is_empty());
        assert_eq!(index.count(p(0.0, 0.0)), 2);
        assert_eq!(index.count(p(10.0, 0.0)), 1);
        assert_eq!(index.count(p(5.0, 5.0)), 0);
    }

    #[test]
    fn test_first_last() {
        let index = square_index();
        assert_eq!(index.first(), Some(p(0.0, 0.0)));
        assert_eq!(index.last(), Some(p(10.0, 10.0)));

        let empty: VertexIndex<f64> = VertexIndex::new();
        assert!(empty.is_empty());
        assert_eq!(empty.first(), None);
        assert_eq!(empty.last(), None);
    }

    #[test]
    fn test_higher_and_lower() {
        let index = square_index();
        assert_eq!(index.higher(p(4.0, 4.0)), Some(p(10.0, 0.0)));
        assert_eq!(index.lower(p(10.0, 0.0)), Some(p(0.0, 10.0)));
        assert_eq!(index.lower(p(0.0, 10.0)), Some(p(0.0, 0.0)));
        assert_eq!(index.lower(p(0.0, 0.0)), None);
        assert_eq!(index.higher(p(10.0, 10.0)), None);
    }

    #[test]
    fn test_higher_is_strict() {
        let index = square_index();
        assert_eq!(index.higher(p(0.0, 0.0)), Some(p(0.0, 10.0)));
        assert_eq!(index.lower(p(10.0, 10.0)), Some(p(10.0, 0.0)));
    }

    #[test]
    fn test_near_points_stay_distinct() {
        let mut index = VertexIndex::new();
        index.insert(p(1.0, 1.0));
        index.insert(p(1.0 + 1e-9, 1.0));
        assert_eq!(index.len(), 2);
        assert_eq!(index.higher(p(1.0, 1.0)), Some(p(1.0 + 1e-9, 1.0)));
    }

    #[test]
    fn test_key_ordering() {
        let a = VertexKey(p(1.0, 5.0));
        let b = VertexKey(p(2.0, 0.0));
        assert!(a < b);
        assert_eq!(VertexKey(p(0.0, 0.0)), VertexKey(p(-0.0, 0.0)));
    }
}
