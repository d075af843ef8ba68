//! Main menu scene

use mini_arcade::prelude::*;
use mini_arcade::scene::SceneRequest;

use crate::game::settings::GameState;

/// Title menu: start, quit, and a live difficulty selector
pub struct MenuScene {
    menu: Menu,
}

impl MenuScene {
    #[must_use]
    pub fn new() -> Self {
        let menu = Menu::new(
            "DEJA BOUNCE",
            vec![
                MenuItem::new("start", "START"),
                MenuItem::new("quit", "QUIT"),
                MenuItem::new("difficulty", "DIFFICULTY"),
            ],
        )
        .with_hint("ENTER TO SELECT - ESC TO QUIT");
        Self { menu }
    }
}

impl Default for MenuScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene<GameState> for MenuScene {
    fn name(&self) -> &'static str {
        "menu"
    }

    fn on_enter(&mut self, ctx: &mut EngineContext<GameState>) {
        self.menu.set_label(
            "difficulty",
            format!("DIFFICULTY: {}", ctx.state.difficulty.label()),
        );
    }

    fn tick(&mut self, ctx: &mut EngineContext<GameState>, frame: &InputFrame, _dt: f32) {
        if let Some(id) = self.menu.handle(frame) {
            match id {
                "start" => ctx.change_scene("pong"),
                "quit" => ctx.request(SceneRequest::Quit),
                "difficulty" => {
                    ctx.state.difficulty = ctx.state.difficulty.cycle();
                    self.menu.set_label(
                        "difficulty",
                        format!("DIFFICULTY: {}", ctx.state.difficulty.label()),
                    );
                }
                _ => {}
            }
        }

        if frame.just_pressed(Key::Escape) {
            ctx.request(SceneRequest::Quit);
        }
    }

    fn draw(&self, ctx: &EngineContext<GameState>, list: &mut DrawList) {
        self.menu.draw(list, ctx.viewport());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::difficulty::Difficulty;

    fn context() -> EngineContext<GameState> {
        EngineContext::new(&EngineConfig::default(), GameState::default())
    }

    fn pressed(keys: &[Key]) -> InputFrame {
        InputFrame::from_keys(keys, keys)
    }

    #[test]
    fn test_start_changes_to_pong() {
        let mut ctx = context();
        let mut scene = MenuScene::new();
        scene.on_enter(&mut ctx);

        scene.tick(&mut ctx, &pressed(&[Key::Enter]), 0.0);
        assert_eq!(ctx.pending_requests(), &[SceneRequest::Change("pong")]);
    }

    #[test]
    fn test_difficulty_cycles_in_shared_state() {
        let mut ctx = context();
        let mut scene = MenuScene::new();
        scene.on_enter(&mut ctx);

        // Navigate down to the difficulty entry and activate twice
        scene.tick(&mut ctx, &pressed(&[Key::Down]), 0.0);
        scene.tick(&mut ctx, &pressed(&[Key::Down]), 0.0);
        scene.tick(&mut ctx, &pressed(&[Key::Enter]), 0.0);
        assert_eq!(ctx.state.difficulty, Difficulty::Hard);

        scene.tick(&mut ctx, &pressed(&[Key::Enter]), 0.0);
        assert_eq!(ctx.state.difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_escape_quits() {
        let mut ctx = context();
        let mut scene = MenuScene::new();
        scene.on_enter(&mut ctx);

        scene.tick(&mut ctx, &pressed(&[Key::Escape]), 0.0);
        assert_eq!(ctx.pending_requests(), &[SceneRequest::Quit]);
    }
}
