//! Deja Bounce: a pong-like built on the Mini Arcade engine

pub mod constants;
pub mod cpu;
pub mod difficulty;
pub mod entities;
pub mod scenes;
pub mod settings;

use mini_arcade::prelude::{EngineConfig, SceneRegistry};

use constants::{BACKGROUND, TICK_RATE, WINDOW_HEIGHT, WINDOW_WIDTH};
use scenes::{MenuScene, PauseScene, PongScene};
use settings::GameState;

/// Engine configuration for Deja Bounce
#[must_use]
pub fn engine_config() -> EngineConfig {
    EngineConfig::default()
        .with_title("Deja Bounce")
        .with_game_id("deja-bounce")
        .with_size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .with_tick_rate(TICK_RATE)
        .with_background(BACKGROUND)
}

/// All Deja Bounce scenes, registered under their names
#[must_use]
pub fn registry() -> SceneRegistry<GameState> {
    let mut registry = SceneRegistry::new();
    registry.register("menu", || Box::new(MenuScene::new()));
    registry.register("pong", || Box::new(PongScene::new()));
    registry.register("pause", || Box::new(PauseScene::new()));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_scenes_registered() {
        let registry = registry();
        for name in ["menu", "pong", "pause"] {
            assert!(registry.contains(name), "missing scene '{name}'");
        }
    }
}
