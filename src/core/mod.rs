//! Core engine module
//!
//! Contains the main Engine struct, configuration, time keeping and the
//! event queue.

mod engine;
mod events;
mod stats;
mod time;

pub use engine::{Engine, EngineConfig, EngineContext, EngineError};
pub use events::{CollisionKind, EventQueue, GameEvent, Side};
pub use stats::FrameStats;
pub use time::{FixedTimestep, Time};
