//! Error types for hole joining.

use num_traits::Float;
use thiserror::Error;

use crate::primitives::Point2;

/// Errors that can occur while building rings or joining holes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum JoinError {
    /// The first and last coordinates of a ring differ.
    #[error("ring is not closed")]
    RingNotClosed,

    /// A ring has too few coordinates to enclose an area.
    #[error("ring has {count} coordinates, at least 4 are required")]
    TooFewCoordinates {
        /// Number of coordinates supplied, including the closing one.
        count: usize,
    },

    /// A ring contains a NaN or infinite ordinate.
    #[error("ring coordinate {index} is not finite")]
    NonFiniteCoordinate {
        /// Index of the offending coordinate.
        index: usize,
    },

    /// A selected join vertex is missing from the working ring.
    ///
    /// This is an internal invariant violation: the tolerant lookup and the
    /// sorted vertex index disagree.
    #[error("join vertex ({x}, {y}) is not in the working ring")]
    VertexNotFound {
        /// X ordinate of the vertex.
        x: f64,
        /// Y ordinate of the vertex.
        y: f64,
    },

    /// No join candidate could be produced for a hole vertex.
    #[error("no join candidate for hole vertex ({x}, {y})")]
    MissingCandidate {
        /// X ordinate of the hole vertex.
        x: f64,
        /// Y ordinate of the hole vertex.
        y: f64,
    },
}

impl JoinError {
    pub(crate) fn vertex_not_found<F: Float>(p: Point2<F>) -> Self {
        let (x, y) = p.to_f64();
        JoinError::VertexNotFound { x, y }
    }

    pub(crate) fn missing_candidate<F: Float>(p: Point2<F>) -> Self {
        let (x, y) = p.to_f64();
        JoinError::MissingCandidate { x, y }
    }
}
