//! Velocity integration

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A 2D linear velocity in units per second
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity2 {
    /// Velocity vector
    pub linear: Vec2,
}

impl Velocity2 {
    /// Create a velocity from components
    #[must_use]
    pub const fn new(vx: f32, vy: f32) -> Self {
        Self {
            linear: Vec2::new(vx, vy),
        }
    }

    /// Advance a position by this velocity over `dt` seconds
    #[must_use]
    pub fn advance(&self, pos: Vec2, dt: f32) -> Vec2 {
        pos + self.linear * dt
    }

    /// Zero the velocity
    pub fn stop(&mut self) {
        self.linear = Vec2::ZERO;
    }

    /// Whether the velocity is exactly zero
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.linear == Vec2::ZERO
    }
}
