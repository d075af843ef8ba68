//! Scene stack with overlay support

use crate::core::EngineContext;

use super::{Scene, SceneError, SceneRegistry, SceneRequest};

/// The active scenes, bottom to top.
///
/// `Change` replaces the whole stack; `Push`/`Pop` layer overlays (the pause
/// menu) over a running scene. Only the top scene ticks.
pub struct SceneStack<S> {
    scenes: Vec<Box<dyn Scene<S>>>,
}

impl<S> SceneStack<S> {
    /// Create an empty stack
    #[must_use]
    pub fn new() -> Self {
        Self { scenes: Vec::new() }
    }

    /// Apply a queued request against the registry
    ///
    /// # Errors
    ///
    /// Returns an error for unknown scene names or popping an empty stack
    pub fn apply(
        &mut self,
        request: SceneRequest,
        registry: &SceneRegistry<S>,
        ctx: &mut EngineContext<S>,
    ) -> Result<(), SceneError> {
        match request {
            SceneRequest::Change(name) => {
                while let Some(mut scene) = self.scenes.pop() {
                    scene.on_exit(ctx);
                }
                let mut scene = registry.create(name)?;
                log::info!("scene change -> '{name}'");
                scene.on_enter(ctx);
                self.scenes.push(scene);
            }
            SceneRequest::Push(name) => {
                let mut scene = registry.create(name)?;
                log::info!("scene push -> '{name}' (overlay: {})", scene.is_overlay());
                scene.on_enter(ctx);
                self.scenes.push(scene);
            }
            SceneRequest::Pop => {
                let mut scene = self.scenes.pop().ok_or(SceneError::EmptyStack)?;
                log::info!("scene pop <- '{}'", scene.name());
                scene.on_exit(ctx);
            }
            SceneRequest::Quit => {
                ctx.quit();
            }
        }
        Ok(())
    }

    /// The scene that should tick, if any
    pub fn top_mut(&mut self) -> Option<&mut Box<dyn Scene<S>>> {
        self.scenes.last_mut()
    }

    /// Scenes in draw order (bottom to top).
    ///
    /// A non-overlay top scene hides everything beneath it, so drawing
    /// starts at the last non-overlay scene.
    pub fn draw_order(&self) -> impl Iterator<Item = &Box<dyn Scene<S>>> {
        let start = self
            .scenes
            .iter()
            .rposition(|s| !s.is_overlay())
            .unwrap_or(0);
        self.scenes[start..].iter()
    }

    /// Number of scenes on the stack
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Whether the stack is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}

impl<S> Default for SceneStack<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EngineConfig;
    use crate::input::InputFrame;
    use crate::render::DrawList;

    struct Plain(&'static str);

    impl Scene<u32> for Plain {
        fn name(&self) -> &'static str {
            self.0
        }

        fn on_enter(&mut self, ctx: &mut EngineContext<u32>) {
            ctx.state += 1;
        }

        fn tick(&mut self, _ctx: &mut EngineContext<u32>, _frame: &InputFrame, _dt: f32) {}

        fn draw(&self, _ctx: &EngineContext<u32>, _list: &mut DrawList) {}
    }

    struct Overlay;

    impl Scene<u32> for Overlay {
        fn name(&self) -> &'static str {
            "overlay"
        }

        fn tick(&mut self, _ctx: &mut EngineContext<u32>, _frame: &InputFrame, _dt: f32) {}

        fn draw(&self, _ctx: &EngineContext<u32>, _list: &mut DrawList) {}

        fn is_overlay(&self) -> bool {
            true
        }
    }

    fn fixture() -> (SceneStack<u32>, SceneRegistry<u32>, EngineContext<u32>) {
        let mut registry = SceneRegistry::new();
        registry.register("menu", || Box::new(Plain("menu")));
        registry.register("pong", || Box::new(Plain("pong")));
        registry.register("pause", || Box::new(Overlay));
        let ctx = EngineContext::new(&EngineConfig::default(), 0);
        (SceneStack::new(), registry, ctx)
    }

    #[test]
    fn test_change_replaces_stack() {
        let (mut stack, registry, mut ctx) = fixture();

        stack
            .apply(SceneRequest::Change("menu"), &registry, &mut ctx)
            .unwrap();
        stack
            .apply(SceneRequest::Push("pause"), &registry, &mut ctx)
            .unwrap();
        assert_eq!(stack.len(), 2);

        stack
            .apply(SceneRequest::Change("pong"), &registry, &mut ctx)
            .unwrap();
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.top_mut().unwrap().name(), "pong");
    }

    #[test]
    fn test_push_pop_overlay() {
        let (mut stack, registry, mut ctx) = fixture();

        stack
            .apply(SceneRequest::Change("pong"), &registry, &mut ctx)
            .unwrap();
        stack
            .apply(SceneRequest::Push("pause"), &registry, &mut ctx)
            .unwrap();

        // The overlay ticks; both scenes draw
        assert_eq!(stack.top_mut().unwrap().name(), "overlay");
        assert_eq!(stack.draw_order().count(), 2);

        stack
            .apply(SceneRequest::Pop, &registry, &mut ctx)
            .unwrap();
        assert_eq!(stack.top_mut().unwrap().name(), "pong");
    }

    #[test]
    fn test_non_overlay_hides_scenes_beneath() {
        let (mut stack, registry, mut ctx) = fixture();

        stack
            .apply(SceneRequest::Change("menu"), &registry, &mut ctx)
            .unwrap();
        stack
            .apply(SceneRequest::Push("pong"), &registry, &mut ctx)
            .unwrap();

        // pong is opaque, menu below must not draw
        assert_eq!(stack.draw_order().count(), 1);
    }

    #[test]
    fn test_pop_empty_is_an_error() {
        let (mut stack, registry, mut ctx) = fixture();
        let err = stack.apply(SceneRequest::Pop, &registry, &mut ctx).unwrap_err();
        assert!(matches!(err, SceneError::EmptyStack));
    }

    #[test]
    fn test_on_enter_runs() {
        let (mut stack, registry, mut ctx) = fixture();

        stack
            .apply(SceneRequest::Change("menu"), &registry, &mut ctx)
            .unwrap();
        assert_eq!(ctx.state, 1);
    }
}
