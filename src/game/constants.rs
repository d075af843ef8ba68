//! Game-wide constants for Deja Bounce

use mini_arcade::glam::Vec2;

/// Playfield and window width in pixels
pub const WINDOW_WIDTH: u32 = 800;
/// Playfield and window height in pixels
pub const WINDOW_HEIGHT: u32 = 480;
/// Simulation ticks per second
pub const TICK_RATE: u32 = 60;

/// Paddle size in pixels
pub const PADDLE_SIZE: Vec2 = Vec2::new(14.0, 80.0);
/// Gap between a paddle and its playfield edge
pub const PADDLE_MARGIN: f32 = 20.0;
/// Human paddle speed in pixels per second
pub const PADDLE_SPEED: f32 = 300.0;

/// Ball size in pixels
pub const BALL_SIZE: Vec2 = Vec2::new(10.0, 10.0);
/// Horizontal serve speed
pub const SERVE_SPEED_X: f32 = 250.0;
/// Vertical serve speed (upward)
pub const SERVE_SPEED_Y: f32 = -200.0;

/// Vertical speed a full-edge paddle hit imparts
pub const PADDLE_INFLUENCE_VY: f32 = 220.0;
/// How much of the paddle's own vertical speed transfers to the ball
pub const PADDLE_INERTIA_FACTOR: f32 = 0.30;
/// Clamp on the ball's vertical speed after a paddle hit
pub const BALL_MAX_VY: f32 = 400.0;
/// Horizontal speedup applied on every paddle hit
pub const BALL_SPEEDUP: f32 = 1.03;

/// Ball positions kept for the trail overlay
pub const TRAIL_LEN: usize = 30;
/// dt multiplier while the slow-ball cheat is active
pub const SLOW_MO_SCALE: f32 = 0.25;

/// Distance from the center line to each score readout
pub const SCORE_GAP: f32 = 40.0;

/// Window clear color
pub const BACKGROUND: [f32; 4] = [0.12, 0.12, 0.12, 1.0];
/// Paddle and ball color
pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Center line and score color
pub const DIM: [f32; 4] = [0.78, 0.78, 0.78, 1.0];
