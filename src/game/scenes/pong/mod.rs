//! The pong match scene

mod systems;
mod world;

pub use world::{Intent, PongWorld, Score};

use mini_arcade::glam::Vec2;
use mini_arcade::prelude::*;

use crate::game::constants::{DIM, SCORE_GAP, WHITE, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::game::cpu::CpuController;
use crate::game::settings::GameState;

use systems::{
    BallSystem, CollisionSystem, CpuSystem, HotkeySystem, IntentSystem, PaddleSystem, PauseSystem,
    RulesSystem, TrailSystem,
};

/// One match of Deja Bounce: human on the left, CPU on the right
pub struct PongScene {
    world: PongWorld,
    pipeline: SystemPipeline<PongWorld>,
    events: EventQueue,
    cheats: CheatTracker,
    tick: u64,
}

impl PongScene {
    /// Create the scene; the world is rebuilt on entry
    #[must_use]
    pub fn new() -> Self {
        Self {
            world: PongWorld::new(Vec2::new(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32)),
            pipeline: SystemPipeline::new(),
            events: EventQueue::new(),
            cheats: CheatTracker::new(),
            tick: 0,
        }
    }

    /// Simulation world, for inspection in tests
    #[must_use]
    pub fn world(&self) -> &PongWorld {
        &self.world
    }

    fn process_events(&mut self, ctx: &mut EngineContext<GameState>) {
        self.events.swap();
        let pending: Vec<GameEvent> = self.events.drain().collect();
        for event in pending {
            match event {
                GameEvent::Collision { kind } => {
                    log::trace!("collision: {kind:?}");
                }
                GameEvent::PlaySound { name, volume } => {
                    ctx.audio.play(name, volume);
                }
                GameEvent::PauseRequested => ctx.push_scene("pause"),
                GameEvent::CaptureRequested(kind) => ctx.handle_capture(kind, "pong"),
                GameEvent::ScoreChanged { side, score } => {
                    log::info!("{side:?} scores, now at {score}");
                }
                _ => {}
            }
        }
    }

    fn apply_cheats(&mut self, frame: &InputFrame) {
        for cheat in self.cheats.feed(frame.pressed()) {
            match cheat {
                "god" => {
                    self.world.god_mode_left = !self.world.god_mode_left;
                    log::info!("god mode: {}", self.world.god_mode_left);
                }
                "slow" => {
                    self.world.slow_ball = !self.world.slow_ball;
                    log::info!("slow ball: {}", self.world.slow_ball);
                }
                _ => {}
            }
        }
    }
}

impl Default for PongScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene<GameState> for PongScene {
    fn name(&self) -> &'static str {
        "pong"
    }

    fn on_enter(&mut self, ctx: &mut EngineContext<GameState>) {
        self.world = PongWorld::new(ctx.viewport());
        self.events = EventQueue::new();
        self.tick = 0;

        self.cheats = CheatTracker::new();
        self.cheats.register("god", &[Key::G, Key::O, Key::D]);
        self.cheats
            .register("slow", &[Key::S, Key::L, Key::O, Key::W]);

        let difficulty = ctx.state.difficulty;
        let cpu = CpuController::new(Side::Right, difficulty.cpu_config(), ctx.capture.seed());
        self.world.right_paddle.speed = cpu.max_speed();
        log::info!("starting match, difficulty {}", difficulty.label());

        self.pipeline = SystemPipeline::new();
        self.pipeline
            .add(Box::new(IntentSystem::new(InputMapper::with_defaults())));
        self.pipeline.add(Box::new(PauseSystem));
        self.pipeline.add(Box::new(HotkeySystem));
        self.pipeline.add(Box::new(CpuSystem::new(cpu)));
        self.pipeline.add(Box::new(PaddleSystem));
        self.pipeline.add(Box::new(BallSystem));
        self.pipeline.add(Box::new(TrailSystem));
        self.pipeline.add(Box::new(CollisionSystem));
        self.pipeline.add(Box::new(RulesSystem));

        if ctx.audio.sound_count() == 0 {
            for (name, path) in [
                ("wall_hit", "assets/sounds/wall_hit.wav"),
                ("paddle_hit", "assets/sounds/paddle_hit.wav"),
            ] {
                if let Err(e) = ctx.audio.load(name, path) {
                    log::debug!("sound '{name}' unavailable: {e}");
                }
            }
        }
    }

    fn tick(&mut self, ctx: &mut EngineContext<GameState>, frame: &InputFrame, dt: f32) {
        self.process_events(ctx);

        // The pause overlay raised this before popping itself
        if ctx.state.resume_requested {
            ctx.state.resume_requested = false;
            self.world.resume();
        }

        self.apply_cheats(frame);

        self.world.input = frame.clone();
        let mut tick_ctx = TickCtx {
            dt,
            tick: self.tick,
            events: &mut self.events,
        };
        self.pipeline.run(&mut self.world, &mut tick_ctx);
        self.tick += 1;
    }

    fn draw(&self, _ctx: &EngineContext<GameState>, list: &mut DrawList) {
        let world = &self.world;
        let vw = world.viewport.x;
        let vh = world.viewport.y;

        // Center dashed line
        let line_x = vw * 0.5 - 2.0;
        let dash = Vec2::new(4.0, 16.0);
        let mut y = 0.0;
        while y < vh {
            list.push_rect(Vec2::new(line_x, y), dash, DIM);
            y += dash.y + 12.0;
        }

        list.push_rect(world.left_paddle.body.pos, world.left_paddle.body.size, WHITE);
        list.push_rect(
            world.right_paddle.body.pos,
            world.right_paddle.body.size,
            WHITE,
        );

        // Trail fades in under the ball, oldest faintest
        if world.trail_mode && !world.trail.is_empty() {
            let count = world.trail.len() as f32;
            for (i, pos) in world.trail.iter().enumerate() {
                let alpha = (i + 1) as f32 / count * 0.5;
                list.push_rect(*pos, world.ball.body.size, [1.0, 1.0, 1.0, alpha]);
            }
        }

        list.push_rect(world.ball.body.pos, world.ball.body.size, WHITE);

        // Score, mirrored around the center line
        let scale = 3.0;
        let left_text = world.score.left.to_string();
        let right_text = world.score.right.to_string();
        let left_w = measure_text(&left_text, scale).x;
        let center = vw * 0.5;
        draw_text(
            list,
            &left_text,
            Vec2::new(center - SCORE_GAP - left_w, 20.0),
            scale,
            DIM,
        );
        draw_text(
            list,
            &right_text,
            Vec2::new(center + SCORE_GAP, 20.0),
            scale,
            DIM,
        );
    }
}
