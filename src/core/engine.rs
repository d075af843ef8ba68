//! Core Engine struct and main loop
//!
//! The engine owns the window, the render backend, input, the scene stack
//! and the fixed timestep. Games provide a shared state type `S`, a scene
//! registry and the name of the scene to start in; everything else is
//! driven from here.

use std::fmt;
use std::sync::Arc;

use glam::Vec2;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::audio::AudioManager;
use crate::capture::{Capture, CaptureKind};
use crate::core::{FixedTimestep, FrameStats, Time};
use crate::input::{Input, Key};
use crate::render::{DrawList, HeadlessRenderer, RenderBackend, RenderError, WgpuRenderer};
use crate::scene::{SceneError, SceneRegistry, SceneRequest, SceneStack};

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Window title
    pub title: String,
    /// Identifier used for capture and replay files
    pub game_id: String,
    /// Window and playfield width in pixels
    pub width: u32,
    /// Window and playfield height in pixels
    pub height: u32,
    /// Simulation ticks per second
    pub tick_rate: u32,
    /// Enable VSync
    pub vsync: bool,
    /// Background clear color
    pub background: [f32; 4],
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            title: String::from("Mini Arcade"),
            game_id: String::from("game"),
            width: 800,
            height: 480,
            tick_rate: 60,
            vsync: true,
            background: [0.05, 0.05, 0.08, 1.0],
        }
    }
}

impl EngineConfig {
    /// Set the window title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the identifier used for capture and replay files
    #[must_use]
    pub fn with_game_id(mut self, game_id: impl Into<String>) -> Self {
        self.game_id = game_id.into();
        self
    }

    /// Set window dimensions
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the simulation tick rate
    #[must_use]
    pub fn with_tick_rate(mut self, tick_rate: u32) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Enable or disable VSync
    #[must_use]
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// Set the background clear color
    #[must_use]
    pub fn with_background(mut self, background: [f32; 4]) -> Self {
        self.background = background;
        self
    }
}

/// Errors that stop the engine
#[derive(Debug)]
pub enum EngineError {
    /// The event loop could not be created or run
    EventLoop(String),
    /// A scene operation failed
    Scene(SceneError),
    /// The render backend failed
    Render(RenderError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventLoop(e) => write!(f, "Event loop error: {e}"),
            Self::Scene(e) => write!(f, "Scene error: {e}"),
            Self::Render(e) => write!(f, "Render error: {e}"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<SceneError> for EngineError {
    fn from(e: SceneError) -> Self {
        Self::Scene(e)
    }
}

impl From<RenderError> for EngineError {
    fn from(e: RenderError) -> Self {
        Self::Render(e)
    }
}

/// Context passed to scenes.
///
/// Carries the shared game state plus the engine services scenes talk to:
/// audio, capture, frame stats and the scene request queue.
pub struct EngineContext<S> {
    /// Shared game state, visible to every scene
    pub state: S,
    /// Sound effect playback
    pub audio: AudioManager,
    /// Screenshot, video and replay state
    pub capture: Capture,
    /// Rolling frame statistics
    pub stats: FrameStats,
    viewport: Vec2,
    requests: Vec<SceneRequest>,
    replay_restart: Option<String>,
    should_quit: bool,
}

impl<S> EngineContext<S> {
    /// Create a context for the given config and initial state
    #[must_use]
    pub fn new(config: &EngineConfig, state: S) -> Self {
        Self {
            state,
            audio: AudioManager::new(),
            capture: Capture::new(config.game_id.clone(), config.tick_rate),
            stats: FrameStats::new(),
            viewport: Vec2::new(config.width as f32, config.height as f32),
            requests: Vec::new(),
            replay_restart: None,
            should_quit: false,
        }
    }

    /// Playfield size in pixels
    #[must_use]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub(crate) fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = Vec2::new(width as f32, height as f32);
    }

    /// Queue a scene stack request, applied after the current tick
    pub fn request(&mut self, request: SceneRequest) {
        self.requests.push(request);
    }

    /// Queue a full scene change
    pub fn change_scene(&mut self, name: &'static str) {
        self.request(SceneRequest::Change(name));
    }

    /// Queue pushing an overlay scene
    pub fn push_scene(&mut self, name: &'static str) {
        self.request(SceneRequest::Push(name));
    }

    /// Queue popping the top scene
    pub fn pop_scene(&mut self) {
        self.request(SceneRequest::Pop);
    }

    /// Request engine shutdown
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Whether shutdown was requested
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Dispatch a capture hotkey.
    ///
    /// `current_scene` labels screenshots and is recorded into replay
    /// headers so playback can restart from the right scene.
    pub fn handle_capture(&mut self, kind: CaptureKind, current_scene: &'static str) {
        match kind {
            CaptureKind::Screenshot => self.capture.request_screenshot(current_scene),
            CaptureKind::ToggleVideo => self.capture.toggle_video(),
            CaptureKind::ToggleReplayRecord => {
                if self.capture.replay_recording() {
                    if let Err(e) = self.capture.stop_replay_record() {
                        log::error!("Failed to save replay: {e}");
                    }
                } else {
                    self.capture.stop_replay_play();
                    self.capture.start_replay_record(current_scene);
                    // Restart so the recording begins from a fresh state
                    // built with the new seed
                    self.replay_restart = Some(current_scene.to_string());
                }
            }
            CaptureKind::ToggleReplayPlay => {
                if self.capture.replay_playing() {
                    self.capture.stop_replay_play();
                } else {
                    match self.capture.start_replay_play(self.capture.replay_path()) {
                        Ok(header) => {
                            // Restart from the recorded scene so playback
                            // sees the same initial state
                            self.replay_restart = Some(header.initial_scene);
                        }
                        Err(e) => log::error!("Failed to load replay: {e}"),
                    }
                }
            }
        }
    }

    /// Requests queued so far this tick
    #[must_use]
    pub fn pending_requests(&self) -> &[SceneRequest] {
        &self.requests
    }

    pub(crate) fn take_requests(&mut self) -> Vec<SceneRequest> {
        std::mem::take(&mut self.requests)
    }

    pub(crate) fn take_replay_restart(&mut self) -> Option<String> {
        self.replay_restart.take()
    }
}

/// Main engine struct
pub struct Engine<S> {
    config: EngineConfig,
    ctx: EngineContext<S>,
    registry: SceneRegistry<S>,
    stack: SceneStack<S>,
    input: Input,
    time: Time,
    timestep: FixedTimestep,
    initial_scene: &'static str,
    renderer: Option<Box<dyn RenderBackend>>,
    window: Option<Arc<Window>>,
    started: bool,
}

impl<S: 'static> Engine<S> {
    /// Create an engine from a config, initial state, scene registry and
    /// the name of the starting scene.
    #[must_use]
    pub fn new(
        config: EngineConfig,
        state: S,
        registry: SceneRegistry<S>,
        initial_scene: &'static str,
    ) -> Self {
        let ctx = EngineContext::new(&config, state);
        let timestep = FixedTimestep::new(config.tick_rate);
        Self {
            config,
            ctx,
            registry,
            stack: SceneStack::new(),
            input: Input::new(),
            time: Time::new(),
            timestep,
            initial_scene,
            renderer: None,
            window: None,
            started: false,
        }
    }

    /// Shared context, for inspection in tests
    #[must_use]
    pub fn context(&self) -> &EngineContext<S> {
        &self.ctx
    }

    /// Shared context, mutable
    pub fn context_mut(&mut self) -> &mut EngineContext<S> {
        &mut self.ctx
    }

    /// Run the engine with a window until quit
    ///
    /// # Errors
    ///
    /// Returns an error if the starting scene is unknown or the event loop
    /// cannot run.
    pub fn run(mut self) -> Result<(), EngineError> {
        env_logger::init();
        log::info!("Starting engine: {}", self.config.title);

        if !self.registry.contains(self.initial_scene) {
            return Err(SceneError::UnknownScene(self.initial_scene.to_string()).into());
        }

        let event_loop =
            EventLoop::new().map_err(|e| EngineError::EventLoop(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop
            .run_app(&mut self)
            .map_err(|e| EngineError::EventLoop(e.to_string()))?;

        Ok(())
    }

    /// Run the simulation without a window, returning the draw lists the
    /// scenes produced (one per tick).
    ///
    /// Two headless runs with the same seed and inputs must return
    /// identical draw lists.
    ///
    /// # Errors
    ///
    /// Returns an error if the starting scene is unknown.
    pub fn run_headless(&mut self, ticks: u64) -> Result<Vec<DrawList>, EngineError> {
        let mut renderer = HeadlessRenderer::new(self.config.width, self.config.height);

        self.ensure_started()?;
        for _ in 0..ticks {
            if self.ctx.should_quit() {
                break;
            }
            self.step_tick();
            let list = self.build_draw_list();
            renderer.render(&list)?;
        }
        Ok(renderer.frames().to_vec())
    }

    fn ensure_started(&mut self) -> Result<(), EngineError> {
        if !self.started {
            self.stack
                .apply(SceneRequest::Change(self.initial_scene), &self.registry, &mut self.ctx)?;
            self.started = true;
        }
        Ok(())
    }

    /// Run one fixed simulation tick
    fn step_tick(&mut self) {
        let dt = self.timestep.dt();

        // During playback the recorded frames replace live input entirely
        let frame = match self.ctx.capture.next_playback_frame() {
            Some(frame) => frame,
            None => self.input.snapshot(),
        };
        self.ctx.capture.record_tick(&frame);
        self.input.end_tick();

        if let Some(scene) = self.stack.top_mut() {
            scene.tick(&mut self.ctx, &frame, dt);
        }
        self.time.advance_tick();

        self.apply_requests();
    }

    fn apply_requests(&mut self) {
        for request in self.ctx.take_requests() {
            if let Err(e) = self.stack.apply(request, &self.registry, &mut self.ctx) {
                log::error!("Scene request failed: {e}");
            }
        }

        if let Some(scene) = self.ctx.take_replay_restart() {
            match self.registry.static_name(&scene) {
                Some(name) => {
                    if let Err(e) =
                        self.stack
                            .apply(SceneRequest::Change(name), &self.registry, &mut self.ctx)
                    {
                        log::error!("Replay restart failed: {e}");
                    }
                    self.timestep.reset();
                }
                None => log::error!("Replay references unknown scene '{scene}'"),
            }
        }
    }

    fn build_draw_list(&self) -> DrawList {
        let mut list = DrawList::new(self.config.background);
        for scene in self.stack.draw_order() {
            scene.draw(&self.ctx, &mut list);
        }
        list
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let frame_dt = self.time.update();
        self.ctx.stats.record_frame(self.time.delta());

        let ticks = self.timestep.advance(frame_dt);
        self.ctx.stats.record_ticks(ticks);
        for _ in 0..ticks {
            self.step_tick();
        }

        if self.ctx.should_quit() {
            log::info!("Quit requested, shutting down");
            event_loop.exit();
            return;
        }

        let list = self.build_draw_list();
        if let Some(renderer) = &mut self.renderer {
            if self.ctx.capture.wants_frame() {
                renderer.request_capture();
            }
            if let Err(e) = renderer.render(&list) {
                log::error!("Render failed: {e}");
            }
            if let Some(image) = renderer.take_capture() {
                if let Err(e) = self.ctx.capture.store_frame(&image) {
                    log::error!("Capture failed: {e}");
                }
            }
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl<S: 'static> ApplicationHandler for Engine<S> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height))
            .with_resizable(false);

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .expect("Failed to create window"),
        );

        let renderer = pollster::block_on(WgpuRenderer::new(
            Arc::clone(&window),
            self.config.vsync,
        ));
        self.renderer = Some(Box::new(renderer));
        self.window = Some(window);

        if let Err(e) = self.ensure_started() {
            log::error!("Failed to enter starting scene: {e}");
            event_loop.exit();
            return;
        }
        log::info!("Engine initialized");
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, shutting down");
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                if new_size.width > 0 && new_size.height > 0 {
                    self.ctx.set_viewport(new_size.width, new_size.height);
                    if let Some(renderer) = &mut self.renderer {
                        renderer.resize(new_size.width, new_size.height);
                    }
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let winit::keyboard::PhysicalKey::Code(code) = event.physical_key {
                    if let Some(key) = Key::from_keycode(code) {
                        self.input.process_key(key, event.state);
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                self.frame(event_loop);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
