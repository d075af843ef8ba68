//! The pong simulation pipeline
//!
//! Each system is one small step of the tick, ordered explicitly:
//! intent (10), pause (12), hotkeys (13), cpu (15), paddles (20),
//! ball (30), trail (35), collision (40), rules (50).

use mini_arcade::capture::CaptureKind;
use mini_arcade::prelude::*;

use crate::game::constants::{
    BALL_MAX_VY, BALL_SPEEDUP, PADDLE_INERTIA_FACTOR, PADDLE_INFLUENCE_VY, SERVE_SPEED_X,
};
use crate::game::cpu::CpuController;
use crate::game::entities::{Ball, Paddle};

use super::world::{Intent, PongWorld};

// ============================================================================
// Intent
// ============================================================================

/// Translates the tick's input frame into player intent
pub struct IntentSystem {
    mapper: InputMapper,
}

impl IntentSystem {
    pub fn new(mapper: InputMapper) -> Self {
        Self { mapper }
    }
}

impl System<PongWorld> for IntentSystem {
    fn name(&self) -> &'static str {
        "pong_intent"
    }

    fn order(&self) -> i32 {
        10
    }

    fn step(&mut self, world: &mut PongWorld, _ctx: &mut TickCtx<'_>) {
        let frame = &world.input;
        let m = &self.mapper;
        world.intent = Intent {
            move_left: m.action_axis(frame, Action::LeftPaddleUp, Action::LeftPaddleDown),
            move_right: m.action_axis(frame, Action::RightPaddleUp, Action::RightPaddleDown),
            pause: m.action_pressed(frame, Action::Pause),
            toggle_trail: m.action_pressed(frame, Action::ToggleTrail),
            screenshot: m.action_pressed(frame, Action::Screenshot),
            replay_record: m.action_pressed(frame, Action::ReplayRecord),
            replay_play: m.action_pressed(frame, Action::ReplayPlay),
            video_record: m.action_pressed(frame, Action::VideoRecord),
        };
    }
}

// ============================================================================
// Pause
// ============================================================================

/// Freezes the world and asks the scene for the pause overlay
pub struct PauseSystem;

impl System<PongWorld> for PauseSystem {
    fn name(&self) -> &'static str {
        "pong_pause"
    }

    fn order(&self) -> i32 {
        12
    }

    fn step(&mut self, world: &mut PongWorld, ctx: &mut TickCtx<'_>) {
        if !world.intent.pause || world.paused {
            return;
        }
        world.freeze();
        ctx.events.push(GameEvent::PauseRequested);
    }
}

// ============================================================================
// Hotkeys
// ============================================================================

/// One-shot hotkeys: trail overlay and capture toggles
pub struct HotkeySystem;

impl System<PongWorld> for HotkeySystem {
    fn name(&self) -> &'static str {
        "pong_hotkeys"
    }

    fn order(&self) -> i32 {
        13
    }

    fn step(&mut self, world: &mut PongWorld, ctx: &mut TickCtx<'_>) {
        if world.intent.toggle_trail {
            world.trail_mode = !world.trail_mode;
            if !world.trail_mode {
                world.trail.clear();
            }
        }
        if world.intent.screenshot {
            ctx.events
                .push(GameEvent::CaptureRequested(CaptureKind::Screenshot));
        }
        if world.intent.replay_record {
            ctx.events
                .push(GameEvent::CaptureRequested(CaptureKind::ToggleReplayRecord));
        }
        if world.intent.replay_play {
            ctx.events
                .push(GameEvent::CaptureRequested(CaptureKind::ToggleReplayPlay));
        }
        if world.intent.video_record {
            ctx.events
                .push(GameEvent::CaptureRequested(CaptureKind::ToggleVideo));
        }
    }
}

// ============================================================================
// CPU
// ============================================================================

/// Overrides the right paddle's intent with the CPU decision
pub struct CpuSystem {
    controller: CpuController,
}

impl CpuSystem {
    pub fn new(controller: CpuController) -> Self {
        Self { controller }
    }
}

impl System<PongWorld> for CpuSystem {
    fn name(&self) -> &'static str {
        "pong_cpu"
    }

    fn order(&self) -> i32 {
        15
    }

    fn step(&mut self, world: &mut PongWorld, _ctx: &mut TickCtx<'_>) {
        world.intent.move_right = self.controller.compute_move(&world.right_paddle, &world.ball);
    }
}

// ============================================================================
// Movement
// ============================================================================

/// Moves both paddles from intent, clamped to the playfield
pub struct PaddleSystem;

impl PaddleSystem {
    fn advance(paddle: &mut Paddle, intent: f32, viewport_h: f32, dt: f32) {
        paddle.velocity = Velocity2::new(0.0, intent * paddle.speed);
        let mut pos = paddle.velocity.advance(paddle.body.pos, dt);
        pos.y = pos.y.clamp(0.0, viewport_h - paddle.body.size.y);
        paddle.body.pos = pos;
    }
}

impl System<PongWorld> for PaddleSystem {
    fn name(&self) -> &'static str {
        "pong_paddles"
    }

    fn order(&self) -> i32 {
        20
    }

    fn enabled(&self, world: &PongWorld) -> bool {
        !world.paused
    }

    fn step(&mut self, world: &mut PongWorld, ctx: &mut TickCtx<'_>) {
        let vh = world.viewport.y;
        Self::advance(&mut world.left_paddle, world.intent.move_left, vh, ctx.dt);
        Self::advance(&mut world.right_paddle, world.intent.move_right, vh, ctx.dt);
    }
}

/// Moves the ball, honoring the slow-ball cheat
pub struct BallSystem;

impl System<PongWorld> for BallSystem {
    fn name(&self) -> &'static str {
        "pong_ball"
    }

    fn order(&self) -> i32 {
        30
    }

    fn enabled(&self, world: &PongWorld) -> bool {
        !world.paused
    }

    fn step(&mut self, world: &mut PongWorld, ctx: &mut TickCtx<'_>) {
        let mut dt = ctx.dt;
        if world.slow_ball {
            dt *= world.slow_mo_scale;
        }
        world.ball.body.pos = world.ball.velocity.advance(world.ball.body.pos, dt);
    }
}

/// Records ball positions for the trail overlay
pub struct TrailSystem;

impl System<PongWorld> for TrailSystem {
    fn name(&self) -> &'static str {
        "pong_trail"
    }

    fn order(&self) -> i32 {
        35
    }

    fn enabled(&self, world: &PongWorld) -> bool {
        !world.paused && world.trail_mode
    }

    fn step(&mut self, world: &mut PongWorld, _ctx: &mut TickCtx<'_>) {
        let pos = world.ball.body.pos;
        world.push_trail(pos);
    }
}

// ============================================================================
// Collision
// ============================================================================

/// Wall bounces and paddle hits
pub struct CollisionSystem;

impl CollisionSystem {
    /// Steer the ball by where it struck the paddle, plus a share of the
    /// paddle's own movement, then speed it up.
    fn apply_paddle_influence(ball: &mut Ball, paddle: &Paddle) {
        let offset = ball.body.center().y - paddle.body.center().y;
        let denom = if paddle.body.size.y > 0.0 {
            paddle.body.size.y * 0.5
        } else {
            1.0
        };
        let norm = (offset / denom).clamp(-1.0, 1.0);

        let new_vy = norm * PADDLE_INFLUENCE_VY + paddle.velocity.linear.y * PADDLE_INERTIA_FACTOR;
        ball.velocity.linear.y = new_vy.clamp(-BALL_MAX_VY, BALL_MAX_VY);
        ball.velocity.linear.x *= BALL_SPEEDUP;
    }
}

impl System<PongWorld> for CollisionSystem {
    fn name(&self) -> &'static str {
        "pong_collision"
    }

    fn order(&self) -> i32 {
        40
    }

    fn enabled(&self, world: &PongWorld) -> bool {
        !world.paused
    }

    fn step(&mut self, world: &mut PongWorld, ctx: &mut TickCtx<'_>) {
        // Top/bottom walls
        let bounce = VerticalBounce::new(Bounds::from_size(world.viewport));
        if bounce.apply(&mut world.ball.body, &mut world.ball.velocity) {
            ctx.events.push(GameEvent::Collision {
                kind: CollisionKind::Wall,
            });
            ctx.events.push(GameEvent::PlaySound {
                name: "wall_hit",
                volume: 1.0,
            });
        }

        // Paddles, using the velocity after any wall bounce
        let vx = world.ball.velocity.linear.x;
        if vx < 0.0 {
            if world.ball.body.intersects(&world.left_paddle.body) {
                world.ball.body.pos.x =
                    world.left_paddle.body.pos.x + world.left_paddle.body.size.x;
                world.ball.velocity.linear.x = vx.abs();
                Self::apply_paddle_influence(&mut world.ball, &world.left_paddle);
                ctx.events.push(GameEvent::Collision {
                    kind: CollisionKind::PaddleLeft,
                });
                ctx.events.push(GameEvent::PlaySound {
                    name: "paddle_hit",
                    volume: 1.0,
                });
            }
        } else if vx > 0.0 && world.ball.body.intersects(&world.right_paddle.body) {
            world.ball.body.pos.x = world.right_paddle.body.pos.x - world.ball.body.size.x;
            world.ball.velocity.linear.x = -vx.abs();
            Self::apply_paddle_influence(&mut world.ball, &world.right_paddle);
            ctx.events.push(GameEvent::Collision {
                kind: CollisionKind::PaddleRight,
            });
            ctx.events.push(GameEvent::PlaySound {
                name: "paddle_hit",
                volume: 1.0,
            });
        }
    }
}

// ============================================================================
// Rules
// ============================================================================

/// Scoring, god-mode goal bounces and ball resets
pub struct RulesSystem;

impl RulesSystem {
    fn bounce_from_left_goal(ball: &mut Ball) {
        ball.body.pos.x = 0.0;
        let vx = ball.velocity.linear.x.abs();
        ball.velocity.linear.x = if vx > 0.0 { vx } else { SERVE_SPEED_X };
    }

    fn bounce_from_right_goal(ball: &mut Ball, viewport_w: f32) {
        ball.body.pos.x = viewport_w - ball.body.size.x;
        let vx = ball.velocity.linear.x.abs();
        ball.velocity.linear.x = -(if vx > 0.0 { vx } else { SERVE_SPEED_X });
    }
}

impl System<PongWorld> for RulesSystem {
    fn name(&self) -> &'static str {
        "pong_rules"
    }

    fn order(&self) -> i32 {
        50
    }

    fn enabled(&self, world: &PongWorld) -> bool {
        !world.paused
    }

    fn step(&mut self, world: &mut PongWorld, ctx: &mut TickCtx<'_>) {
        let vw = world.viewport.x;
        let x = world.ball.body.pos.x;
        let bw = world.ball.body.size.x;

        if x + bw < 0.0 {
            if world.god_mode_left {
                Self::bounce_from_left_goal(&mut world.ball);
                return;
            }
            world.score.right += 1;
            ctx.events.push(GameEvent::ScoreChanged {
                side: Side::Right,
                score: world.score.right,
            });
            world.reset_ball(Side::Right);
        } else if x > vw {
            if world.god_mode_right {
                Self::bounce_from_right_goal(&mut world.ball, vw);
                return;
            }
            world.score.left += 1;
            ctx.events.push(GameEvent::ScoreChanged {
                side: Side::Left,
                score: world.score.left,
            });
            world.reset_ball(Side::Left);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mini_arcade::core::EventQueue;
    use mini_arcade::glam::Vec2;

    fn world() -> PongWorld {
        PongWorld::new(Vec2::new(800.0, 480.0))
    }

    fn run<S: System<PongWorld>>(system: &mut S, world: &mut PongWorld) -> Vec<GameEvent> {
        let mut events = EventQueue::new();
        let mut ctx = TickCtx {
            dt: 1.0 / 60.0,
            tick: 0,
            events: &mut events,
        };
        if system.enabled(world) {
            system.step(world, &mut ctx);
        }
        events.swap();
        events.drain().collect()
    }

    #[test]
    fn test_intent_from_keys() {
        let mut system = IntentSystem::new(InputMapper::with_defaults());
        let mut world = world();
        world.input = InputFrame::from_keys(&[Key::S, Key::Up], &[Key::Escape, Key::T]);

        run(&mut system, &mut world);
        assert_eq!(world.intent.move_left, 1.0);
        assert_eq!(world.intent.move_right, -1.0);
        assert!(world.intent.pause);
        assert!(world.intent.toggle_trail);
        assert!(!world.intent.screenshot);
    }

    #[test]
    fn test_pause_freezes_once() {
        let mut system = PauseSystem;
        let mut world = world();
        world.intent.pause = true;

        let events = run(&mut system, &mut world);
        assert!(world.paused);
        assert!(world.ball.velocity.is_stopped());
        assert!(matches!(events[0], GameEvent::PauseRequested));

        // A second pause press while paused does nothing
        let events = run(&mut system, &mut world);
        assert!(events.is_empty());
    }

    #[test]
    fn test_hotkeys_emit_capture_events() {
        let mut system = HotkeySystem;
        let mut world = world();
        world.intent.screenshot = true;
        world.intent.replay_record = true;

        let events = run(&mut system, &mut world);
        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[0],
            GameEvent::CaptureRequested(CaptureKind::Screenshot)
        ));
        assert!(matches!(
            events[1],
            GameEvent::CaptureRequested(CaptureKind::ToggleReplayRecord)
        ));
    }

    #[test]
    fn test_trail_toggle_clears_on_disable() {
        let mut system = HotkeySystem;
        let mut world = world();

        world.intent.toggle_trail = true;
        run(&mut system, &mut world);
        assert!(world.trail_mode);

        world.push_trail(Vec2::ZERO);
        run(&mut system, &mut world);
        assert!(!world.trail_mode);
        assert!(world.trail.is_empty());
    }

    #[test]
    fn test_paddles_clamp_to_playfield() {
        let mut system = PaddleSystem;
        let mut world = world();
        world.intent.move_left = -1.0;

        for _ in 0..1000 {
            run(&mut system, &mut world);
        }
        assert_eq!(world.left_paddle.body.pos.y, 0.0);

        world.intent.move_left = 1.0;
        for _ in 0..1000 {
            run(&mut system, &mut world);
        }
        assert_eq!(world.left_paddle.body.pos.y, 480.0 - 80.0);
    }

    #[test]
    fn test_movement_skipped_while_paused() {
        let mut world = world();
        world.paused = true;
        world.intent.move_left = 1.0;
        let before = (world.left_paddle.body.pos, world.ball.body.pos);

        run(&mut PaddleSystem, &mut world);
        run(&mut BallSystem, &mut world);
        assert_eq!((world.left_paddle.body.pos, world.ball.body.pos), before);
    }

    #[test]
    fn test_slow_ball_quarters_speed() {
        let mut system = BallSystem;
        let mut world = world();
        world.ball.velocity = Velocity2::new(240.0, 0.0);
        let x0 = world.ball.body.pos.x;

        run(&mut system, &mut world);
        let normal_step = world.ball.body.pos.x - x0;

        world.slow_ball = true;
        let x1 = world.ball.body.pos.x;
        run(&mut system, &mut world);
        let slow_step = world.ball.body.pos.x - x1;

        assert!((slow_step - normal_step * 0.25).abs() < 1e-4);
    }

    #[test]
    fn test_wall_bounce_emits_collision() {
        let mut system = CollisionSystem;
        let mut world = world();
        world.ball.body.pos.y = -2.0;
        world.ball.velocity = Velocity2::new(100.0, -200.0);

        let events = run(&mut system, &mut world);
        assert!(world.ball.velocity.linear.y > 0.0);
        assert!(matches!(
            events[0],
            GameEvent::Collision {
                kind: CollisionKind::Wall
            }
        ));
        assert!(matches!(
            events[1],
            GameEvent::PlaySound {
                name: "wall_hit",
                ..
            }
        ));
    }

    #[test]
    fn test_paddle_hit_reflects_and_speeds_up() {
        let mut system = CollisionSystem;
        let mut world = world();

        // Ball overlapping the left paddle, moving left, struck dead center
        world.ball.body.pos = Vec2::new(
            world.left_paddle.body.pos.x + 4.0,
            world.left_paddle.body.center().y - world.ball.body.size.y * 0.5,
        );
        world.ball.velocity = Velocity2::new(-250.0, -100.0);

        let events = run(&mut system, &mut world);

        // Pushed out of the paddle, reflected and sped up
        assert_eq!(
            world.ball.body.pos.x,
            world.left_paddle.body.pos.x + world.left_paddle.body.size.x
        );
        assert!((world.ball.velocity.linear.x - 250.0 * BALL_SPEEDUP).abs() < 1e-3);
        // Center hit with a stationary paddle kills vertical speed
        assert!(world.ball.velocity.linear.y.abs() < 1e-3);
        assert!(matches!(
            events[0],
            GameEvent::Collision {
                kind: CollisionKind::PaddleLeft
            }
        ));
        assert!(matches!(
            events[1],
            GameEvent::PlaySound {
                name: "paddle_hit",
                ..
            }
        ));
    }

    #[test]
    fn test_edge_hit_steers_the_ball() {
        let mut system = CollisionSystem;
        let mut world = world();

        // Strike near the paddle's bottom edge
        world.ball.body.pos = Vec2::new(
            world.left_paddle.body.pos.x + 4.0,
            world.left_paddle.body.max().y - 4.0,
        );
        world.ball.velocity = Velocity2::new(-250.0, 0.0);

        run(&mut system, &mut world);
        assert!(world.ball.velocity.linear.y > 150.0);
        assert!(world.ball.velocity.linear.y <= BALL_MAX_VY);
    }

    #[test]
    fn test_scoring_resets_toward_scorer() {
        let mut system = RulesSystem;
        let mut world = world();
        world.ball.body.pos.x = -world.ball.body.size.x - 1.0;

        let events = run(&mut system, &mut world);
        assert_eq!(world.score.right, 1);
        assert_eq!(world.ball.body.center(), Vec2::new(400.0, 240.0));
        assert!(world.ball.velocity.linear.x > 0.0);
        assert!(matches!(
            events[0],
            GameEvent::ScoreChanged {
                side: Side::Right,
                score: 1
            }
        ));
    }

    #[test]
    fn test_god_mode_bounces_instead_of_conceding() {
        let mut system = RulesSystem;
        let mut world = world();
        world.god_mode_left = true;
        world.ball.body.pos.x = -world.ball.body.size.x - 1.0;
        world.ball.velocity = Velocity2::new(-300.0, 50.0);

        let events = run(&mut system, &mut world);
        assert_eq!(world.score.right, 0);
        assert!(events.is_empty());
        assert_eq!(world.ball.body.pos.x, 0.0);
        assert_eq!(world.ball.velocity.linear.x, 300.0);
    }
}
