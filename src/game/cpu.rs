//! CPU paddle controller
//!
//! Follows the ball's center with a per-run aim error, a dead zone so it
//! doesn't jitter, and a reaction distance so it only commits once the ball
//! is close enough. All randomness comes from the run seed, so replays see
//! the same opponent.

use mini_arcade::prelude::Side;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use super::entities::{Ball, Paddle};

/// CPU difficulty tuning
#[derive(Debug, Clone, Copy)]
pub struct CpuConfig {
    /// How fast the CPU paddle can move, pixels per second
    pub max_speed: f32,
    /// How close to the ball center before it stops moving
    pub dead_zone: f32,
    /// Horizontal distance at which the CPU starts reacting
    pub reaction_distance: f32,
    /// Vertical aim error range, +/- pixels
    pub error_margin: f32,
}

/// Decides per-tick movement for a CPU-controlled paddle
#[derive(Debug)]
pub struct CpuController {
    side: Side,
    config: CpuConfig,
    /// Fixed vertical aim error, sampled from the run seed
    aim_offset: f32,
}

impl CpuController {
    /// Create a controller for the given side, seeded for determinism
    #[must_use]
    pub fn new(side: Side, config: CpuConfig, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let m = config.error_margin;
        let aim_offset = if m > 0.0 { rng.gen_range(-m..=m) } else { 0.0 };
        Self {
            side,
            config,
            aim_offset,
        }
    }

    /// The paddle speed this controller assumes
    #[must_use]
    pub fn max_speed(&self) -> f32 {
        self.config.max_speed
    }

    /// Decide the movement intent: -1.0 up, 0.0 stop, +1.0 down
    #[must_use]
    pub fn compute_move(&self, paddle: &Paddle, ball: &Ball) -> f32 {
        let vx = ball.velocity.linear.x;

        // React only when the ball is moving toward this paddle
        match self.side {
            Side::Right if vx <= 0.0 => return 0.0,
            Side::Left if vx >= 0.0 => return 0.0,
            _ => {}
        }

        let distance_x = match self.side {
            Side::Right => paddle.body.pos.x - (ball.body.pos.x + ball.body.size.x),
            Side::Left => ball.body.pos.x - (paddle.body.pos.x + paddle.body.size.x),
        };
        if distance_x > self.config.reaction_distance {
            return 0.0;
        }

        let target_y = ball.body.center().y + self.aim_offset;
        let diff = target_y - paddle.body.center().y;

        if diff.abs() < self.config.dead_zone {
            return 0.0;
        }
        if diff > 0.0 { 1.0 } else { -1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mini_arcade::glam::Vec2;
    use mini_arcade::prelude::Velocity2;

    fn config() -> CpuConfig {
        CpuConfig {
            max_speed: 140.0,
            dead_zone: 10.0,
            reaction_distance: 260.0,
            // No aim error so assertions are exact
            error_margin: 0.0,
        }
    }

    fn setup() -> (Paddle, Ball) {
        let viewport = Vec2::new(800.0, 480.0);
        let paddle = Paddle::new(Vec2::new(766.0, 200.0));
        let ball = Ball::new(viewport);
        (paddle, ball)
    }

    #[test]
    fn test_ignores_ball_moving_away() {
        let cpu = CpuController::new(Side::Right, config(), 1);
        let (paddle, mut ball) = setup();
        ball.velocity = Velocity2::new(-250.0, 0.0);
        ball.body.pos.y = 0.0;

        assert_eq!(cpu.compute_move(&paddle, &ball), 0.0);
    }

    #[test]
    fn test_ignores_ball_out_of_reaction_range() {
        let cpu = CpuController::new(Side::Right, config(), 1);
        let (paddle, mut ball) = setup();
        ball.velocity = Velocity2::new(250.0, 0.0);
        ball.body.pos = Vec2::new(50.0, 0.0);

        assert_eq!(cpu.compute_move(&paddle, &ball), 0.0);
    }

    #[test]
    fn test_follows_approaching_ball() {
        let cpu = CpuController::new(Side::Right, config(), 1);
        let (paddle, mut ball) = setup();
        ball.velocity = Velocity2::new(250.0, 0.0);

        // Ball below the paddle center, well within reaction range
        ball.body.pos = Vec2::new(700.0, 400.0);
        assert_eq!(cpu.compute_move(&paddle, &ball), 1.0);

        // Ball above
        ball.body.pos.y = 50.0;
        assert_eq!(cpu.compute_move(&paddle, &ball), -1.0);
    }

    #[test]
    fn test_dead_zone_stops_jitter() {
        let cpu = CpuController::new(Side::Right, config(), 1);
        let (paddle, mut ball) = setup();
        ball.velocity = Velocity2::new(250.0, 0.0);

        // Ball center within the dead zone of the paddle center
        ball.body.pos = Vec2::new(700.0, paddle.body.center().y - 5.0 - 5.0);
        assert_eq!(cpu.compute_move(&paddle, &ball), 0.0);
    }

    #[test]
    fn test_same_seed_same_offset() {
        let cfg = CpuConfig {
            error_margin: 24.0,
            ..config()
        };
        let a = CpuController::new(Side::Right, cfg, 42);
        let b = CpuController::new(Side::Right, cfg, 42);
        assert_eq!(a.aim_offset, b.aim_offset);
    }
}
