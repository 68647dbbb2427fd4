//! Spatial acceleration structures.

mod bvh;

pub use bvh::{Bounded, Bvh, BvhNode};
