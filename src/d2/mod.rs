//! 2D space primitives
//!
//! Axis-aligned boxes, velocities and playfield boundaries used by the
//! simulation systems.

mod boundary;
mod geometry;
mod physics;

pub use boundary::{Bounds, VerticalBounce};
pub use geometry::Aabb;
pub use physics::Velocity2;
