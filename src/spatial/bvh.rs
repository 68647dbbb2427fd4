//! Bounding Volume Hierarchy over boundary segments.
//!
//! Each node holds an axis-aligned bounding box enclosing every primitive in
//! its subtree, so a box query only descends into subtrees it overlaps. The
//! crossing engine uses it to find the boundary segments that a candidate
//! join line could possibly cross.

use crate::bounds::Aabb2;
use crate::primitives::{Point2, Segment2};
use num_traits::Float;
use std::cmp::Ordering;

/// A trait for objects that can be bounded and stored in a BVH.
pub trait Bounded<F: Float> {
    /// Returns the axis-aligned bounding box of this object.
    fn bounds(&self) -> Aabb2<F>;

    /// Returns the centroid of this object (used for partitioning).
    fn centroid(&self) -> Point2<F> {
        self.bounds().center()
    }
}

impl<F: Float> Bounded<F> for Segment2<F> {
    fn bounds(&self) -> Aabb2<F> {
        Segment2::bounds(*self)
    }

    fn centroid(&self) -> Point2<F> {
        self.start.midpoint(self.end)
    }
}

impl<F: Float> Bounded<F> for Aabb2<F> {
    fn bounds(&self) -> Aabb2<F> {
        *self
    }
}

/// A node in the BVH tree.
#[derive(Debug, Clone)]
pub enum BvhNode<F> {
    /// A leaf node covering a run of the index array.
    Leaf {
        /// Bounding box of all primitives in this leaf.
        bounds: Aabb2<F>,
        /// Starting index in the primitive index array.
        first: usize,
        /// Number of primitives in this leaf.
        count: usize,
    },
    /// An internal node with two children.
    Internal {
        /// Bounding box of all primitives in this subtree.
        bounds: Aabb2<F>,
        /// Index of the left child node.
        left: usize,
        /// Index of the right child node.
        right: usize,
    },
}

impl<F: Float> BvhNode<F> {
    /// Returns the bounding box of this node.
    pub fn bounds(&self) -> Aabb2<F> {
        match self {
            BvhNode::Leaf { bounds, .. } => *bounds,
            BvhNode::Internal { bounds, .. } => *bounds,
        }
    }
}

/// A Bounding Volume Hierarchy for box queries.
///
/// The BVH stores primitives by index, so the primitive slice stays owned by
/// the caller and must be passed back in for every query.
///
/// # Example
///
/// ```
/// use keyhole::spatial::Bvh;
/// use keyhole::{Aabb2, Point2, Segment2};
///
/// let edges: Vec<Segment2<f64>> = vec![
///     Segment2::from_coords(0.0, 0.0, 1.0, 0.0),
///     Segment2::from_coords(1.0, 0.0, 1.0, 1.0),
///     Segment2::from_coords(5.0, 5.0, 6.0, 6.0),
/// ];
///
/// let bvh = Bvh::build(&edges, 1);
/// let query = Aabb2::new(Point2::new(-1.0, -1.0), Point2::new(2.0, 0.5));
/// let mut hits = bvh.query_aabb(&edges, query);
/// hits.sort();
/// assert_eq!(hits, vec![0, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct Bvh<F> {
    nodes: Vec<BvhNode<F>>,
    /// Indices into the primitive array, reordered so each leaf is a run.
    indices: Vec<usize>,
    root: usize,
}

impl<F: Float> Bvh<F> {
    /// Builds a BVH from a slice of bounded primitives.
    ///
    /// Leaves hold at most `max_leaf_size` primitives (a size of 0 is
    /// treated as 1). An empty slice yields an empty BVH.
    pub fn build<T: Bounded<F>>(primitives: &[T], max_leaf_size: usize) -> Self {
        let n = primitives.len();
        if n == 0 {
            return Self {
                nodes: vec![],
                indices: vec![],
                root: 0,
            };
        }

        let mut indices: Vec<usize> = (0..n).collect();
        let mut nodes = Vec::with_capacity(2 * n);
        let root = build_recursive(
            primitives,
            &mut indices,
            0,
            n,
            max_leaf_size.max(1),
            &mut nodes,
        );

        Self {
            nodes,
            indices,
            root,
        }
    }

    /// Returns true if the BVH is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of primitives in the BVH.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns the bounding box of the entire BVH.
    pub fn bounds(&self) -> Option<Aabb2<F>> {
        self.nodes.get(self.root).map(BvhNode::bounds)
    }

    /// Returns the indices of all primitives whose bounds intersect `query`.
    pub fn query_aabb<T: Bounded<F>>(&self, primitives: &[T], query: Aabb2<F>) -> Vec<usize> {
        let mut results = Vec::new();
        self.for_each_intersecting(primitives, query, |idx| {
            results.push(idx);
            true
        });
        results
    }

    /// Calls a function for each primitive whose bounds intersect `query`.
    ///
    /// The callback receives the primitive index. If it returns `false`, the
    /// traversal stops early.
    pub fn for_each_intersecting<T: Bounded<F>, C>(
        &self,
        primitives: &[T],
        query: Aabb2<F>,
        mut callback: C,
    ) where
        C: FnMut(usize) -> bool,
    {
        if !self.nodes.is_empty() {
            self.visit(primitives, self.root, query, &mut callback);
        }
    }

    fn visit<T: Bounded<F>, C>(
        &self,
        primitives: &[T],
        node_idx: usize,
        query: Aabb2<F>,
        callback: &mut C,
    ) -> bool
    where
        C: FnMut(usize) -> bool,
    {
        let node = &self.nodes[node_idx];
        if !node.bounds().intersects(query) {
            return true;
        }

        match node {
            BvhNode::Leaf { first, count, .. } => self.indices[*first..*first + *count]
                .iter()
                .filter(|&&idx| primitives[idx].bounds().intersects(query))
                .all(|&idx| callback(idx)),
            BvhNode::Internal { left, right, .. } => {
                self.visit(primitives, *left, query, callback)
                    && self.visit(primitives, *right, query, callback)
            }
        }
    }
}

fn build_recursive<F: Float, T: Bounded<F>>(
    primitives: &[T],
    indices: &mut [usize],
    start: usize,
    end: usize,
    max_leaf_size: usize,
    nodes: &mut Vec<BvhNode<F>>,
) -> usize {
    let count = end - start;
    let bounds = compute_bounds(primitives, &indices[start..end]);

    if count <= max_leaf_size {
        nodes.push(BvhNode::Leaf {
            bounds,
            first: start,
            count,
        });
        return nodes.len() - 1;
    }

    // Median split on the longer axis. Sorting the run keeps both halves
    // non-empty even when many centroids coincide.
    let split_on_x = bounds.width() >= bounds.height();
    indices[start..end].sort_by(|&a, &b| {
        let ca = primitives[a].centroid();
        let cb = primitives[b].centroid();
        let (ka, kb) = if split_on_x { (ca.x, cb.x) } else { (ca.y, cb.y) };
        ka.partial_cmp(&kb).unwrap_or(Ordering::Equal)
    });
    let mid = start + count / 2;

    let node_idx = nodes.len();
    nodes.push(BvhNode::Internal {
        bounds,
        left: 0,
        right: 0,
    });

    let left = build_recursive(primitives, indices, start, mid, max_leaf_size, nodes);
    let right = build_recursive(primitives, indices, mid, end, max_leaf_size, nodes);
    nodes[node_idx] = BvhNode::Internal {
        bounds,
        left,
        right,
    };

    node_idx
}

fn compute_bounds<F: Float, T: Bounded<F>>(primitives: &[T], indices: &[usize]) -> Aabb2<F> {
    let first_bounds = primitives[indices[0]].bounds();
    indices[1..]
        .iter()
        .fold(first_bounds, |acc, &idx| acc.union(primitives[idx].bounds()))
}
