//! Polygons with holes and hole joining.
//!
//! This module provides:
//! - [`Ring`] and [`Polygon`] value types with validation and area helpers
//! - [`join`] / [`join_as_polygon`], which connect every hole to the shell
//!   through a zero-width cut, yielding a single self-touching ring
//! - [`HoleJoiner`] for control over the crossing engine and access to the
//!   cuts that were made
//!
//! The joined ring encloses the same area as the original polygon, so it can
//! be handed to algorithms that only accept hole-free input, such as ear
//! clipping triangulators.
//!
//! # Example
//!
//! ```
//! use keyhole::polygon::{join, Polygon, Ring};
//! use keyhole::Point2;
//!
//! let shell = Ring::from_open(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.0, 10.0),
//!     Point2::new(0.0, 10.0),
//! ]).unwrap();
//! let hole = Ring::from_open(vec![
//!     Point2::new(4.0, 4.0),
//!     Point2::new(4.0, 6.0),
//!     Point2::new(6.0, 6.0),
//!     Point2::new(6.0, 4.0),
//! ]).unwrap();
//! let polygon = Polygon::new(shell, vec![hole]);
//!
//! let ring = join(&polygon).unwrap();
//! assert_eq!(ring.len(), 11);
//! assert_eq!(ring.first(), ring.last());
//! ```

mod core;
mod cut_map;
mod hole_joiner;
mod vertex_index;

pub use core::{ring_signed_area, Polygon, Ring};
pub use hole_joiner::{join, join_as_polygon, Cut, HoleJoiner, JoinedRing};
