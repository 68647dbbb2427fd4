//! Geometric predicates and the tolerance used for vertex lookups.
//!
//! Orientation and crossing tests are exact. The only tolerance in the
//! crate is [`JOIN_EPS`], which is applied explicitly where vertices are
//! classified as sharing an x-ordinate or a location.

mod predicates;

pub use predicates::{orientation, segments_cross_properly, Orientation};

/// Absolute tolerance for "same x" and "same vertex" classification.
pub const JOIN_EPS: f64 = 1.0e-4;

/// Returns [`JOIN_EPS`] in the caller's float type.
#[inline]
pub(crate) fn join_eps<F: num_traits::Float>() -> F {
    F::from(JOIN_EPS).unwrap_or_else(F::epsilon)
}
