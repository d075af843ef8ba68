//! Deja Bounce scenes

mod menu;
mod pause;
mod pong;

pub use menu::MenuScene;
pub use pause::PauseScene;
pub use pong::{PongScene, PongWorld};
