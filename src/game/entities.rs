//! Paddle and ball entities

use mini_arcade::glam::Vec2;
use mini_arcade::prelude::{Aabb, Velocity2};

use super::constants::{BALL_SIZE, PADDLE_SIZE, PADDLE_SPEED, SERVE_SPEED_X, SERVE_SPEED_Y};

/// A player or CPU paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    /// Position and size
    pub body: Aabb,
    /// Current velocity, driven by intent each tick
    pub velocity: Velocity2,
    /// Movement speed in pixels per second
    pub speed: f32,
}

impl Paddle {
    /// Create a paddle with its top-left at `pos`
    #[must_use]
    pub fn new(pos: Vec2) -> Self {
        Self {
            body: Aabb::new(pos, PADDLE_SIZE),
            velocity: Velocity2::new(0.0, 0.0),
            speed: PADDLE_SPEED,
        }
    }
}

/// The ball
#[derive(Debug, Clone)]
pub struct Ball {
    /// Position and size
    pub body: Aabb,
    /// Current velocity
    pub velocity: Velocity2,
}

impl Ball {
    /// Create a ball centered in the viewport, serving toward the left
    #[must_use]
    pub fn new(viewport: Vec2) -> Self {
        Self {
            body: Aabb::from_center(viewport * 0.5, BALL_SIZE),
            velocity: Velocity2::new(-SERVE_SPEED_X, SERVE_SPEED_Y),
        }
    }
}
