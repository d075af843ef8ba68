//! Playfield boundaries

use glam::Vec2;

use super::geometry::Aabb;
use super::physics::Velocity2;

/// A rectangular playfield area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner
    pub max: Vec2,
}

impl Bounds {
    /// Bounds spanning from the origin to `size`
    #[must_use]
    pub const fn from_size(size: Vec2) -> Self {
        Self {
            min: Vec2::ZERO,
            max: size,
        }
    }

    /// Playfield width and height
    #[must_use]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// Reflects a moving box off the top and bottom edges of a playfield.
///
/// The box is clamped back inside and its vertical velocity flipped, so a
/// fast object can never tunnel out through a horizontal wall.
#[derive(Debug, Clone, Copy)]
pub struct VerticalBounce {
    bounds: Bounds,
}

impl VerticalBounce {
    /// Create a bounce boundary for the given playfield
    #[must_use]
    pub const fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }

    /// Apply the boundary to a box, returning whether it bounced
    pub fn apply(&self, body: &mut Aabb, vel: &mut Velocity2) -> bool {
        let mut bounced = false;

        if body.pos.y < self.bounds.min.y {
            body.pos.y = self.bounds.min.y;
            vel.linear.y = vel.linear.y.abs();
            bounced = true;
        }

        let bottom = self.bounds.max.y - body.size.y;
        if body.pos.y > bottom {
            body.pos.y = bottom;
            vel.linear.y = -vel.linear.y.abs();
            bounced = true;
        }

        bounced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounce_off_top() {
        let bounce = VerticalBounce::new(Bounds::from_size(Vec2::new(100.0, 100.0)));
        let mut body = Aabb::new(Vec2::new(10.0, -3.0), Vec2::new(10.0, 10.0));
        let mut vel = Velocity2::new(50.0, -80.0);

        assert!(bounce.apply(&mut body, &mut vel));
        assert_eq!(body.pos.y, 0.0);
        assert_eq!(vel.linear.y, 80.0);
        // Horizontal motion untouched
        assert_eq!(vel.linear.x, 50.0);
    }

    #[test]
    fn test_bounce_off_bottom() {
        let bounce = VerticalBounce::new(Bounds::from_size(Vec2::new(100.0, 100.0)));
        let mut body = Aabb::new(Vec2::new(10.0, 95.0), Vec2::new(10.0, 10.0));
        let mut vel = Velocity2::new(0.0, 60.0);

        assert!(bounce.apply(&mut body, &mut vel));
        assert_eq!(body.pos.y, 90.0);
        assert_eq!(vel.linear.y, -60.0);
    }

    #[test]
    fn test_no_bounce_inside() {
        let bounce = VerticalBounce::new(Bounds::from_size(Vec2::new(100.0, 100.0)));
        let mut body = Aabb::new(Vec2::new(10.0, 45.0), Vec2::new(10.0, 10.0));
        let mut vel = Velocity2::new(0.0, 60.0);

        assert!(!bounce.apply(&mut body, &mut vel));
        assert_eq!(body.pos.y, 45.0);
        assert_eq!(vel.linear.y, 60.0);
    }
}
