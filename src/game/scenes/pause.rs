//! Pause overlay scene

use mini_arcade::glam::Vec2;
use mini_arcade::prelude::*;

use crate::game::settings::GameState;

/// Overlay menu shown over a frozen match
pub struct PauseScene {
    menu: Menu,
}

impl PauseScene {
    #[must_use]
    pub fn new() -> Self {
        let menu = Menu::new(
            "PAUSED",
            vec![
                MenuItem::new("continue", "CONTINUE"),
                MenuItem::new("main_menu", "MAIN MENU"),
            ],
        );
        Self { menu }
    }

    fn resume(ctx: &mut EngineContext<GameState>) {
        ctx.state.resume_requested = true;
        ctx.pop_scene();
    }
}

impl Default for PauseScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene<GameState> for PauseScene {
    fn name(&self) -> &'static str {
        "pause"
    }

    fn is_overlay(&self) -> bool {
        true
    }

    fn tick(&mut self, ctx: &mut EngineContext<GameState>, frame: &InputFrame, _dt: f32) {
        if let Some(id) = self.menu.handle(frame) {
            match id {
                "continue" => Self::resume(ctx),
                "main_menu" => ctx.change_scene("menu"),
                _ => {}
            }
        }

        if frame.just_pressed(Key::Escape) {
            Self::resume(ctx);
        }
    }

    fn draw(&self, ctx: &EngineContext<GameState>, list: &mut DrawList) {
        // Dim whatever the frozen match drew beneath
        list.push_rect(Vec2::ZERO, ctx.viewport(), [0.0, 0.0, 0.0, 0.5]);
        self.menu.draw(list, ctx.viewport());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mini_arcade::scene::SceneRequest;

    fn context() -> EngineContext<GameState> {
        EngineContext::new(&EngineConfig::default(), GameState::default())
    }

    fn pressed(keys: &[Key]) -> InputFrame {
        InputFrame::from_keys(keys, keys)
    }

    #[test]
    fn test_continue_pops_and_requests_resume() {
        let mut ctx = context();
        let mut scene = PauseScene::new();

        scene.tick(&mut ctx, &pressed(&[Key::Enter]), 0.0);
        assert!(ctx.state.resume_requested);
        assert_eq!(ctx.pending_requests(), &[SceneRequest::Pop]);
    }

    #[test]
    fn test_escape_also_resumes() {
        let mut ctx = context();
        let mut scene = PauseScene::new();

        scene.tick(&mut ctx, &pressed(&[Key::Escape]), 0.0);
        assert!(ctx.state.resume_requested);
        assert_eq!(ctx.pending_requests(), &[SceneRequest::Pop]);
    }

    #[test]
    fn test_main_menu_replaces_stack() {
        let mut ctx = context();
        let mut scene = PauseScene::new();

        scene.tick(&mut ctx, &pressed(&[Key::Down]), 0.0);
        scene.tick(&mut ctx, &pressed(&[Key::Enter]), 0.0);
        assert!(!ctx.state.resume_requested);
        assert_eq!(ctx.pending_requests(), &[SceneRequest::Change("menu")]);
    }
}
