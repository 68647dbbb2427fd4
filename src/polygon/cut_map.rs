//! Bookkeeping for vertices already used as cut endpoints.

use super::vertex_index::VertexKey;
use crate::primitives::Point2;
use num_traits::Float;
use std::collections::BTreeMap;

/// Which earlier partners push a new cut to a later occurrence.
///
/// Occurrences of a cut vertex run in the opposite angular order on a
/// counter-clockwise ring, so the comparison flips with the shell winding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SkipRule {
    /// Clockwise shell: count partners strictly below the new hole vertex.
    Below,
    /// Counter-clockwise shell: count partners strictly above it.
    Above,
}

impl SkipRule {
    pub(crate) fn for_shell(shell_is_ccw: bool) -> Self {
        if shell_is_ccw {
            SkipRule::Above
        } else {
            SkipRule::Below
        }
    }
}

/// Maps a cut endpoint to the other endpoints joined to it, in join order.
///
/// A vertex that has been cut appears several times in the working ring.
/// When a later hole joins the same vertex, the number of earlier partners
/// on one side of the new hole vertex says which occurrence to splice at,
/// so that the inserted sections do not cross each other. Entries are never
/// removed.
#[derive(Debug, Clone)]
pub(crate) struct CutMap<F> {
    partners: BTreeMap<VertexKey<F>, Vec<Point2<F>>>,
    rule: SkipRule,
}

impl<F: Float> CutMap<F> {
    pub(crate) fn new(rule: SkipRule) -> Self {
        Self {
            partners: BTreeMap::new(),
            rule,
        }
    }

    /// Number of occurrences of `shell` to skip before splicing `hole`.
    pub(crate) fn skip_count(&self, shell: Point2<F>, hole: Point2<F>) -> usize {
        let partners = self.partners(shell).iter();
        match self.rule {
            SkipRule::Below => partners.filter(|p| p.y < hole.y).count(),
            SkipRule::Above => partners.filter(|p| p.y > hole.y).count(),
        }
    }

    /// Records a cut from `shell` to `hole`.
    ///
    /// The hole vertex gets an entry of its own if it has none yet. That
    /// entry is seeded with the hole vertex itself, standing for the cut
    /// that now leaves it, so a later hole joining there is ordered
    /// against the cut's height.
    pub(crate) fn record(&mut self, shell: Point2<F>, hole: Point2<F>) {
        self.partners.entry(VertexKey(shell)).or_default().push(hole);
        self.partners
            .entry(VertexKey(hole))
            .or_insert_with(|| vec![hole]);
    }

    pub(crate) fn partners(&self, p: Point2<F>) -> &[Point2<F>] {
        self.partners
            .get(&VertexKey(p))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    #[test]
    fn test_unknown_vertex_skips_nothing() {
        let map: CutMap<f64> = CutMap::new(SkipRule::Below);
        assert_eq!(map.skip_count(p(0.0, 10.0), p(4.0, 4.0)), 0);
        assert!(map.partners(p(0.0, 10.0)).is_empty());
    }

    #[test]
    fn test_record_both_ends() {
        let mut map = CutMap::new(SkipRule::Below);
        map.record(p(0.0, 10.0), p(4.0, 4.0));
        assert_eq!(map.partners(p(0.0, 10.0)), &[p(4.0, 4.0)]);
        assert_eq!(map.partners(p(4.0, 4.0)), &[p(4.0, 4.0)]);
    }

    #[test]
    fn test_skip_counts_partners_below() {
        let mut map = CutMap::new(SkipRule::Below);
        let shell = p(0.0, 5.0);
        map.record(shell, p(3.0, 2.0));
        map.record(shell, p(3.0, 8.0));

        assert_eq!(map.skip_count(shell, p(4.0, 1.0)), 0);
        assert_eq!(map.skip_count(shell, p(4.0, 5.0)), 1);
        assert_eq!(map.skip_count(shell, p(4.0, 9.0)), 2);
        // Equal height is not below
        assert_eq!(map.skip_count(shell, p(4.0, 8.0)), 1);
    }

    #[test]
    fn test_skip_counts_partners_above() {
        let mut map = CutMap::new(SkipRule::Above);
        let shell = p(0.0, 5.0);
        map.record(shell, p(3.0, 2.0));
        map.record(shell, p(3.0, 8.0));

        assert_eq!(map.skip_count(shell, p(4.0, 1.0)), 2);
        assert_eq!(map.skip_count(shell, p(4.0, 5.0)), 1);
        assert_eq!(map.skip_count(shell, p(4.0, 9.0)), 0);
        assert_eq!(map.skip_count(shell, p(4.0, 2.0)), 1);
    }

    #[test]
    fn test_rule_follows_shell_winding() {
        assert_eq!(SkipRule::for_shell(true), SkipRule::Above);
        assert_eq!(SkipRule::for_shell(false), SkipRule::Below);
    }

    #[test]
    fn test_skip_is_pure() {
        let mut map = CutMap::new(SkipRule::Below);
        map.record(p(0.0, 0.0), p(1.0, 1.0));
        let first = map.skip_count(p(0.0, 0.0), p(2.0, 2.0));
        let second = map.skip_count(p(0.0, 0.0), p(2.0, 2.0));
        assert_eq!(first, 1);
        assert_eq!(first, second);
    }

    #[test]
    fn test_existing_hole_entry_is_kept() {
        let mut map = CutMap::new(SkipRule::Below);
        map.record(p(0.0, 0.0), p(2.0, 2.0));
        map.record(p(2.0, 2.0), p(5.0, 3.0));
        // (2, 2) was seeded as a hole vertex, then gained a partner as a shell vertex
        assert_eq!(map.partners(p(2.0, 2.0)), &[p(2.0, 2.0), p(5.0, 3.0)]);
        map.record(p(1.0, 9.0), p(2.0, 2.0));
        assert_eq!(map.partners(p(2.0, 2.0)).len(), 2);
    }

    #[test]
    fn test_touching_cut_records_once() {
        let mut map = CutMap::new(SkipRule::Below);
        map.record(p(2.0, 5.0), p(2.0, 5.0));
        assert_eq!(map.partners(p(2.0, 5.0)), &[p(2.0, 5.0)]);
    }
}
