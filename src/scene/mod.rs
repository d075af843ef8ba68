//! Scenes, the scene stack and the scene registry

mod registry;
mod stack;

pub use registry::SceneRegistry;
pub use stack::SceneStack;

use crate::core::EngineContext;
use crate::input::InputFrame;
use crate::render::DrawList;

/// A game scene: a self-contained screen with its own simulation and drawing.
///
/// Only the top of the scene stack ticks; every scene on the stack draws,
/// bottom to top, so overlays (pause menus) composite over what is beneath
/// them.
pub trait Scene<S> {
    /// Scene name for logging
    fn name(&self) -> &'static str;

    /// Called when the scene becomes part of the stack
    fn on_enter(&mut self, _ctx: &mut EngineContext<S>) {}

    /// Called when the scene leaves the stack
    fn on_exit(&mut self, _ctx: &mut EngineContext<S>) {}

    /// Advance the simulation by one fixed tick
    fn tick(&mut self, ctx: &mut EngineContext<S>, frame: &InputFrame, dt: f32);

    /// Append this scene's drawing to the frame
    fn draw(&self, ctx: &EngineContext<S>, list: &mut DrawList);

    /// Overlay scenes leave the scenes beneath them visible
    fn is_overlay(&self) -> bool {
        false
    }
}

/// A requested scene stack operation, applied between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneRequest {
    /// Replace the whole stack with the named scene
    Change(&'static str),
    /// Push the named scene on top of the current one
    Push(&'static str),
    /// Pop the top scene
    Pop,
    /// Shut the engine down
    Quit,
}

/// Errors from scene registry and stack operations
#[derive(Debug, Clone)]
pub enum SceneError {
    /// No factory registered under this name
    UnknownScene(String),
    /// Pop was requested with nothing on the stack
    EmptyStack,
}

impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownScene(name) => write!(f, "unknown scene: {name}"),
            Self::EmptyStack => write!(f, "scene stack is empty"),
        }
    }
}

impl std::error::Error for SceneError {}
