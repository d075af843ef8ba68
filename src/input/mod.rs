//! Input handling
//!
//! Physical keyboard state, per-tick input snapshots, logical action
//! mapping and cheat sequence tracking.

mod cheats;
mod frame;
mod key;
mod mapper;
mod state;

pub use cheats::CheatTracker;
pub use frame::InputFrame;
pub use key::Key;
pub use mapper::{Action, InputMapper};
pub use state::Input;
