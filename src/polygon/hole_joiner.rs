//! Hole joining: turns a polygon with holes into a single boundary ring.
//!
//! Holes are processed left to right. Each hole is connected to the current
//! working ring by a cut from its leftmost vertex to a nearby ring vertex
//! that is visible from it, and the hole's vertices are spliced in at that
//! point. Joined holes become part of the working ring, so later holes may
//! connect to them.

use super::core::{Polygon, Ring};
use super::cut_map::{CutMap, SkipRule};
use super::vertex_index::VertexIndex;
use crate::bounds::Aabb2;
use crate::crossing::{BoundaryCrossing, IndexedBoundaryIntersector};
use crate::error::JoinError;
use crate::primitives::{Point2, Segment2};
use crate::tolerance::join_eps;
use log::{debug, trace, warn};
use num_traits::Float;

/// Joins all holes of `polygon` into its shell.
///
/// Returns the closed coordinate sequence of the joined ring. A polygon
/// without holes yields a copy of its shell coordinates.
///
/// # Errors
///
/// Returns [`JoinError::VertexNotFound`] or [`JoinError::MissingCandidate`]
/// if the internal vertex bookkeeping becomes inconsistent, which happens
/// only for invalid input geometry.
pub fn join<F: Float>(polygon: &Polygon<F>) -> Result<Vec<Point2<F>>, JoinError> {
    if !polygon.has_holes() {
        return Ok(polygon.shell().coords().to_vec());
    }
    HoleJoiner::new(polygon)
        .compute()
        .map(JoinedRing::into_coords)
}

/// Joins all holes of `polygon` and wraps the result as a hole-free polygon.
pub fn join_as_polygon<F: Float>(polygon: &Polygon<F>) -> Result<Polygon<F>, JoinError> {
    let coords = join(polygon)?;
    Ok(Polygon::from_shell(Ring::new(coords)?))
}

/// A cut connecting a hole to the working ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cut<F> {
    /// Working-ring vertex the hole was joined to.
    pub shell: Point2<F>,
    /// Hole vertex the cut leaves from.
    pub hole: Point2<F>,
}

impl<F: Float> Cut<F> {
    /// Returns `true` if the hole touched the ring at this vertex, so no
    /// cut edge was inserted.
    pub fn is_touching(&self) -> bool {
        self.shell == self.hole
    }

    /// Returns the cut as a segment from the hole vertex to the ring vertex.
    pub fn segment(&self) -> Segment2<F> {
        Segment2::new(self.hole, self.shell)
    }
}

/// Result of a hole join: the ring and the cuts that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedRing<F> {
    /// Closed coordinate sequence of the joined ring.
    pub coords: Vec<Point2<F>>,
    /// One cut per hole, in the order the holes were joined.
    pub cuts: Vec<Cut<F>>,
}

impl<F: Float> JoinedRing<F> {
    pub fn into_coords(self) -> Vec<Point2<F>> {
        self.coords
    }

    /// Wraps the joined ring as a hole-free polygon.
    pub fn into_polygon(self) -> Result<Polygon<F>, JoinError> {
        Ok(Polygon::from_shell(Ring::new(self.coords)?))
    }
}

/// Joins the holes of one polygon.
///
/// The crossing engine `C` decides whether a candidate cut is visible. It is
/// built from the original boundary and is not updated as cuts are added.
///
/// ```
/// use keyhole::crossing::SimpleBoundaryIntersector;
/// use keyhole::polygon::{HoleJoiner, Polygon, Ring};
/// use keyhole::Point2;
///
/// let square = |x0: f64, y0: f64, s: f64| {
///     Ring::from_open(vec![
///         Point2::new(x0, y0),
///         Point2::new(x0 + s, y0),
///         Point2::new(x0 + s, y0 + s),
///         Point2::new(x0, y0 + s),
///     ])
///     .unwrap()
/// };
/// let polygon = Polygon::new(square(0.0, 0.0, 10.0), vec![square(4.0, 4.0, 2.0).reversed()]);
///
/// let joined = HoleJoiner::with_crossing(&polygon, SimpleBoundaryIntersector::new(&polygon))
///     .compute()
///     .unwrap();
/// assert_eq!(joined.cuts.len(), 1);
/// assert_eq!(joined.coords.len(), 11);
/// ```
#[derive(Debug)]
pub struct HoleJoiner<'a, F, C = IndexedBoundaryIntersector<F>> {
    polygon: &'a Polygon<F>,
    boundary: C,
    shell_coords: Vec<Point2<F>>,
    sorted: VertexIndex<F>,
    cut_map: CutMap<F>,
    cuts: Vec<Cut<F>>,
    eps: F,
}

impl<'a, F: Float> HoleJoiner<'a, F> {
    /// Creates a joiner using the BVH-indexed crossing engine.
    pub fn new(polygon: &'a Polygon<F>) -> Self {
        Self::with_crossing(polygon, IndexedBoundaryIntersector::new(polygon))
    }
}

impl<'a, F: Float, C: BoundaryCrossing<F>> HoleJoiner<'a, F, C> {
    /// Creates a joiner using the given crossing engine.
    pub fn with_crossing(polygon: &'a Polygon<F>, boundary: C) -> Self {
        Self {
            polygon,
            boundary,
            shell_coords: polygon.shell().coords().to_vec(),
            sorted: VertexIndex::new(),
            cut_map: CutMap::new(SkipRule::for_shell(polygon.shell().is_ccw())),
            cuts: Vec::new(),
            eps: join_eps(),
        }
    }

    /// Joins every hole and returns the resulting ring.
    pub fn compute(mut self) -> Result<JoinedRing<F>, JoinError> {
        if self.polygon.has_holes() {
            self.join_holes()?;
        }
        Ok(JoinedRing {
            coords: self.shell_coords,
            cuts: self.cuts,
        })
    }

    fn join_holes(&mut self) -> Result<(), JoinError> {
        self.sorted = VertexIndex::from_points(&self.shell_coords);
        for (n, hole) in sorted_holes(self.polygon).into_iter().enumerate() {
            self.join_hole(n, hole)?;
        }
        Ok(())
    }

    fn join_hole(&mut self, n: usize, hole: &Ring<F>) -> Result<(), JoinError> {
        let coords = hole.coords();
        let left = left_vertices(hole, self.eps);
        let first_left = *left
            .first()
            .ok_or_else(|| JoinError::missing_candidate(coords[0]))?;

        let candidates = self.left_shell_vertices(n, coords[first_left])?;
        let mut shell_pt = *candidates
            .first()
            .ok_or_else(|| JoinError::missing_candidate(coords[first_left]))?;
        let mut hole_index = first_left;

        // Vertical alignment: pick the closest pair by height
        if (shell_pt.x - coords[first_left].x).abs() < self.eps {
            let mut shortest = F::max_value();
            for &i in &left {
                for &candidate in &candidates {
                    let dy = (candidate.y - coords[i].y).abs();
                    if dy < shortest {
                        shortest = dy;
                        hole_index = i;
                        shell_pt = candidate;
                    }
                }
            }
        }

        let hole_pt = coords[hole_index];
        let skip = self.cut_map.skip_count(shell_pt, hole_pt);
        self.cut_map.record(shell_pt, hole_pt);
        let shell_index = self.shell_coord_index(shell_pt, skip)?;
        let touching = self.splice_hole(shell_index, coords, hole_index);

        debug!(
            "hole {}: joined vertex {} at ring index {} (skip {}, touching {})",
            n, hole_index, shell_index, skip, touching
        );
        Ok(())
    }

    /// Ring vertices the hole vertex `hole_pt` may be joined to.
    ///
    /// Walks the vertex index downward from just above `hole_pt` until a
    /// vertex is visible. If that vertex shares the hole vertex's x, every
    /// consecutive index entry with the same x is returned as well.
    fn left_shell_vertices(
        &self,
        n: usize,
        hole_pt: Point2<F>,
    ) -> Result<Vec<Point2<F>>, JoinError> {
        let first = self
            .sorted
            .first()
            .ok_or_else(|| JoinError::missing_candidate(hole_pt))?;

        let mut upper = self.sorted.higher(hole_pt);
        while let Some(p) = upper {
            if p.x != hole_pt.x {
                break;
            }
            upper = self.sorted.higher(p);
        }

        let mut bound = upper;
        let chosen = loop {
            let candidate = match bound {
                Some(p) => self.sorted.lower(p),
                None => self.sorted.last(),
            }
            .unwrap_or(first);

            if self.is_joinable(hole_pt, candidate) {
                break candidate;
            }
            if candidate == first {
                warn!(
                    "hole {}: no visible ring vertex, joining the lowest indexed vertex",
                    n
                );
                break candidate;
            }
            trace!("hole {}: candidate crosses the boundary", n);
            bound = Some(candidate);
        };

        if chosen.x != hole_pt.x {
            return Ok(vec![chosen]);
        }

        let mut same_x = Vec::new();
        let mut cursor = Some(chosen);
        while let Some(p) = cursor {
            if p.x != chosen.x {
                break;
            }
            same_x.push(p);
            cursor = self.sorted.lower(p);
        }
        Ok(same_x)
    }

    fn is_joinable(&self, hole_pt: Point2<F>, shell_pt: Point2<F>) -> bool {
        !self
            .boundary
            .properly_crosses(Segment2::new(hole_pt, shell_pt))
    }

    /// Index of the `skip`-th working-ring coordinate near `shell_pt`.
    fn shell_coord_index(&self, shell_pt: Point2<F>, skip: usize) -> Result<usize, JoinError> {
        self.shell_coords
            .iter()
            .enumerate()
            .filter(|(_, p)| p.near_equals(shell_pt, self.eps))
            .nth(skip)
            .map(|(i, _)| i)
            .ok_or_else(|| JoinError::vertex_not_found(shell_pt))
    }

    /// Splices the hole into the working ring before `shell_index`.
    ///
    /// The inserted section walks the hole once starting at `hole_index`.
    /// Unless the hole touches the ring there, it is framed by a copy of the
    /// ring vertex and a copy of the hole vertex, which form the cut edges.
    /// Returns whether the hole was touching.
    fn splice_hole(&mut self, shell_index: usize, hole: &[Point2<F>], hole_index: usize) -> bool {
        let shell_pt = self.shell_coords[shell_index];
        let hole_pt = hole[hole_index];
        let touching = shell_pt == hole_pt;
        let n = hole.len() - 1;

        let mut section = Vec::with_capacity(n + 2);
        if !touching {
            section.push(shell_pt);
        }
        section.extend((0..n).map(|k| hole[(hole_index + k) % n]));
        if !touching {
            section.push(hole_pt);
        }

        self.sorted.extend(section.iter().copied());
        self.shell_coords.splice(shell_index..shell_index, section);
        self.cuts.push(Cut {
            shell: shell_pt,
            hole: hole_pt,
        });
        debug_assert_eq!(self.sorted.len(), self.shell_coords.len());
        touching
    }
}

/// Holes ordered by envelope: min x, then min y, then max x, then max y.
fn sorted_holes<F: Float>(polygon: &Polygon<F>) -> Vec<&Ring<F>> {
    let mut keyed: Vec<(Aabb2<F>, &Ring<F>)> = polygon
        .holes()
        .iter()
        .map(|hole| (hole.envelope(), hole))
        .collect();
    keyed.sort_by(|a, b| a.0.cmp_lower_left(&b.0));
    keyed.into_iter().map(|(_, hole)| hole).collect()
}

/// Indices of the ring's distinct vertices within `eps` of its minimum x.
fn left_vertices<F: Float>(ring: &Ring<F>, eps: F) -> Vec<usize> {
    let min_x = ring.envelope().min.x;
    ring.coords()[..ring.num_vertices()]
        .iter()
        .enumerate()
        .filter(|(_, p)| (p.x - min_x).abs() < eps)
        .map(|(i, _)| i)
        .collect()
}
