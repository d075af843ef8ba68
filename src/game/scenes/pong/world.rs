//! Pong world state and player intent

use std::collections::VecDeque;

use mini_arcade::glam::Vec2;
use mini_arcade::prelude::{InputFrame, Side, Velocity2};

use crate::game::constants::{
    PADDLE_MARGIN, PADDLE_SIZE, SERVE_SPEED_X, SERVE_SPEED_Y, SLOW_MO_SCALE, TRAIL_LEN,
};
use crate::game::entities::{Ball, Paddle};

/// Current match score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    /// Left player points
    pub left: u32,
    /// Right player points
    pub right: u32,
}

/// What the players want to do this tick, produced by the intent system
#[derive(Debug, Clone, Default)]
pub struct Intent {
    /// Left paddle movement, -1.0 (up) to +1.0 (down)
    pub move_left: f32,
    /// Right paddle movement, -1.0 (up) to +1.0 (down)
    pub move_right: f32,
    /// Pause was pressed this tick
    pub pause: bool,
    /// Trail overlay toggle
    pub toggle_trail: bool,
    /// Screenshot hotkey
    pub screenshot: bool,
    /// Replay record toggle hotkey
    pub replay_record: bool,
    /// Replay playback toggle hotkey
    pub replay_play: bool,
    /// Video capture toggle hotkey
    pub video_record: bool,
}

/// Everything the pong simulation systems read and write
#[derive(Debug)]
pub struct PongWorld {
    /// Playfield size
    pub viewport: Vec2,
    /// Left (human) paddle
    pub left_paddle: Paddle,
    /// Right (CPU) paddle
    pub right_paddle: Paddle,
    /// The ball
    pub ball: Ball,
    /// Match score
    pub score: Score,
    /// Frozen while the pause overlay is up
    pub paused: bool,

    /// Velocity snapshots to restore on resume
    pub saved_ball_vel: Option<Velocity2>,
    pub saved_left_vel: Option<Velocity2>,
    pub saved_right_vel: Option<Velocity2>,

    /// Left goal bounces instead of conceding ("GOD" cheat)
    pub god_mode_left: bool,
    /// Right goal bounces instead of conceding
    pub god_mode_right: bool,

    /// Ball moves at `slow_mo_scale` speed ("SLOW" cheat)
    pub slow_ball: bool,
    /// dt multiplier for the slow-ball cheat
    pub slow_mo_scale: f32,

    /// Trail overlay enabled
    pub trail_mode: bool,
    /// Recent ball positions, oldest first
    pub trail: VecDeque<Vec2>,

    /// Intent for the current tick
    pub intent: Intent,
    /// Input snapshot for the current tick
    pub input: InputFrame,
}

impl PongWorld {
    /// Create the starting world for a viewport
    #[must_use]
    pub fn new(viewport: Vec2) -> Self {
        let paddle_y = (viewport.y - PADDLE_SIZE.y) * 0.5;
        Self {
            viewport,
            left_paddle: Paddle::new(Vec2::new(PADDLE_MARGIN, paddle_y)),
            right_paddle: Paddle::new(Vec2::new(
                viewport.x - PADDLE_MARGIN - PADDLE_SIZE.x,
                paddle_y,
            )),
            ball: Ball::new(viewport),
            score: Score::default(),
            paused: false,
            saved_ball_vel: None,
            saved_left_vel: None,
            saved_right_vel: None,
            god_mode_left: false,
            god_mode_right: false,
            slow_ball: false,
            slow_mo_scale: SLOW_MO_SCALE,
            trail_mode: false,
            trail: VecDeque::with_capacity(TRAIL_LEN),
            intent: Intent::default(),
            input: InputFrame::default(),
        }
    }

    /// Freeze the simulation, saving velocities for resume
    pub fn freeze(&mut self) {
        self.paused = true;
        self.saved_ball_vel = Some(self.ball.velocity);
        self.saved_left_vel = Some(self.left_paddle.velocity);
        self.saved_right_vel = Some(self.right_paddle.velocity);
        self.ball.velocity.stop();
        self.left_paddle.velocity.stop();
        self.right_paddle.velocity.stop();
    }

    /// Unfreeze, restoring the velocities saved by `freeze`
    pub fn resume(&mut self) {
        self.paused = false;
        if let Some(vel) = self.saved_ball_vel.take() {
            self.ball.velocity = vel;
        }
        if let Some(vel) = self.saved_left_vel.take() {
            self.left_paddle.velocity = vel;
        }
        if let Some(vel) = self.saved_right_vel.take() {
            self.right_paddle.velocity = vel;
        }
    }

    /// Recenter the ball and serve it toward the given side
    pub fn reset_ball(&mut self, toward: Side) {
        self.ball.body = mini_arcade::prelude::Aabb::from_center(
            self.viewport * 0.5,
            self.ball.body.size,
        );
        let vx = match toward {
            Side::Left => -SERVE_SPEED_X,
            Side::Right => SERVE_SPEED_X,
        };
        self.ball.velocity = Velocity2::new(vx, SERVE_SPEED_Y);
    }

    /// Append a trail position, dropping the oldest past the cap
    pub fn push_trail(&mut self, pos: Vec2) {
        if self.trail.len() == TRAIL_LEN {
            self.trail.pop_front();
        }
        self.trail.push_back(pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> PongWorld {
        PongWorld::new(Vec2::new(800.0, 480.0))
    }

    #[test]
    fn test_paddles_start_at_margins() {
        let world = world();
        assert_eq!(world.left_paddle.body.pos.x, 20.0);
        assert_eq!(world.right_paddle.body.pos.x, 800.0 - 20.0 - 14.0);
        assert_eq!(world.left_paddle.body.pos.y, 200.0);
    }

    #[test]
    fn test_freeze_and_resume_round_trip() {
        let mut world = world();
        let before = world.ball.velocity;
        world.left_paddle.velocity = Velocity2::new(0.0, 300.0);

        world.freeze();
        assert!(world.paused);
        assert!(world.ball.velocity.is_stopped());
        assert!(world.left_paddle.velocity.is_stopped());

        world.resume();
        assert!(!world.paused);
        assert_eq!(world.ball.velocity, before);
        assert_eq!(world.left_paddle.velocity, Velocity2::new(0.0, 300.0));
        assert!(world.saved_ball_vel.is_none());
    }

    #[test]
    fn test_reset_ball_serves_toward_scorer() {
        let mut world = world();
        world.ball.body.pos = Vec2::new(-20.0, 100.0);

        world.reset_ball(Side::Right);
        assert_eq!(world.ball.body.center(), Vec2::new(400.0, 240.0));
        assert_eq!(world.ball.velocity, Velocity2::new(250.0, -200.0));

        world.reset_ball(Side::Left);
        assert_eq!(world.ball.velocity, Velocity2::new(-250.0, -200.0));
    }

    #[test]
    fn test_trail_is_capped() {
        let mut world = world();
        for i in 0..(TRAIL_LEN + 10) {
            world.push_trail(Vec2::new(i as f32, 0.0));
        }
        assert_eq!(world.trail.len(), TRAIL_LEN);
        assert_eq!(world.trail.front().copied(), Some(Vec2::new(10.0, 0.0)));
    }
}
