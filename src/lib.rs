//! keyhole - Joining polygon holes into a single ring
//!
//! Many polygon algorithms, ear clipping triangulation among them, only
//! accept a simple ring. This library connects each hole of a polygon to its
//! shell with a zero-width cut, producing one closed ring that encloses the
//! same area and visits every original vertex.

pub mod bounds;
pub mod crossing;
pub mod error;
pub mod polygon;
pub mod primitives;
pub mod spatial;
pub mod tolerance;

pub use bounds::Aabb2;
pub use error::JoinError;
pub use polygon::{join, join_as_polygon, HoleJoiner, Polygon, Ring};
pub use primitives::{Point2, Segment2};
pub use tolerance::{orientation, segments_cross_properly, Orientation, JOIN_EPS};
