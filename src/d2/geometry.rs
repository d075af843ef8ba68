//! Axis-aligned bounding boxes

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle: top-left position plus size.
///
/// Screen convention: +y points down, so `pos.y` is the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Aabb {
    /// Create a box from its top-left corner and size
    #[must_use]
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Create a box centered on a point
    #[must_use]
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size * 0.5,
            size,
        }
    }

    /// Top-left corner
    #[must_use]
    pub const fn min(&self) -> Vec2 {
        self.pos
    }

    /// Bottom-right corner
    #[must_use]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    /// Center point
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Whether two boxes overlap
    #[must_use]
    pub fn intersects(&self, other: &Aabb) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.pos.x < b_max.x
            && other.pos.x < a_max.x
            && self.pos.y < b_max.y
            && other.pos.y < a_max.y
    }

    /// Whether a point lies inside the box
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.pos.x && point.x <= max.x && point.y >= self.pos.y && point.y <= max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0));
        let c = Aabb::new(Vec2::new(20.0, 20.0), Vec2::new(5.0, 5.0));

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_contains_and_center() {
        let b = Aabb::from_center(Vec2::new(50.0, 50.0), Vec2::new(10.0, 20.0));

        assert_eq!(b.pos, Vec2::new(45.0, 40.0));
        assert_eq!(b.center(), Vec2::new(50.0, 50.0));
        assert!(b.contains(Vec2::new(50.0, 55.0)));
        assert!(!b.contains(Vec2::new(50.0, 61.0)));
    }
}
