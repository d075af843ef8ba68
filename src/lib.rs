//! Mini Arcade - a small 2D arcade game engine
//!
//! This engine provides:
//! - Scenes with a registry and an overlay-capable scene stack
//! - An ordered system pipeline for per-tick simulation
//! - Input intent mapping decoupled from physical keys
//! - 2D AABB collision and bounce boundaries
//! - Fixed tick simulation with deterministic input replay
//! - Swappable render backends (native wgpu, headless)
//! - Capture hooks: screenshots, video frame dumps, replay record/play

pub mod audio;
pub mod capture;
pub mod core;
pub mod d2;
pub mod input;
pub mod render;
pub mod scene;
pub mod systems;
pub mod ui;

// Re-exports for convenience
pub use glam;
pub use wgpu;
pub use winit;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::audio::AudioManager;
    pub use crate::capture::{Capture, CaptureKind, Replay, ReplayHeader};
    pub use crate::core::{
        CollisionKind, Engine, EngineConfig, EngineContext, EventQueue, FrameStats, GameEvent,
        Side, Time,
    };
    pub use crate::d2::{Aabb, Bounds, Velocity2, VerticalBounce};
    pub use crate::input::{Action, CheatTracker, Input, InputFrame, InputMapper, Key};
    pub use crate::render::{DrawList, RectInstance, RenderBackend, draw_text, measure_text};
    pub use crate::scene::{Scene, SceneRegistry, SceneRequest};
    pub use crate::systems::{System, SystemPipeline, TickCtx};
    pub use crate::ui::{Menu, MenuItem, MenuStyle};
    pub use glam::Vec2;
}
