//! Shared game state visible to every scene

use super::difficulty::Difficulty;

/// State shared across scenes through the engine context.
///
/// The menu writes the difficulty the pong scene reads on entry; the pause
/// overlay raises `resume_requested` so the pong scene knows to unfreeze
/// when it becomes the top scene again.
#[derive(Debug, Clone, Default)]
pub struct GameState {
    /// Selected CPU difficulty
    pub difficulty: Difficulty,
    /// Set by the pause overlay when the player chose Continue
    pub resume_requested: bool,
}
