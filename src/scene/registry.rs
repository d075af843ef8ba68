//! Scene registry: name to factory mapping

use rustc_hash::FxHashMap;

use super::{Scene, SceneError};

/// Factory producing a fresh scene instance
type SceneFactory<S> = Box<dyn Fn() -> Box<dyn Scene<S>>>;

/// Maps scene names to factories.
///
/// Every transition builds a fresh scene, so re-entering a scene always
/// starts it from scratch (replay playback relies on this).
pub struct SceneRegistry<S> {
    factories: FxHashMap<&'static str, SceneFactory<S>>,
}

impl<S> SceneRegistry<S> {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            factories: FxHashMap::default(),
        }
    }

    /// Register a scene factory under a name.
    ///
    /// Re-registering a name replaces the old factory.
    pub fn register<F>(&mut self, name: &'static str, factory: F)
    where
        F: Fn() -> Box<dyn Scene<S>> + 'static,
    {
        if self.factories.insert(name, Box::new(factory)).is_some() {
            log::warn!("scene '{name}' registered twice, replacing");
        }
    }

    /// Instantiate a scene by name
    ///
    /// # Errors
    ///
    /// Returns an error if no factory is registered under `name`
    pub fn create(&self, name: &str) -> Result<Box<dyn Scene<S>>, SceneError> {
        self.factories
            .get(name)
            .map(|f| f())
            .ok_or_else(|| SceneError::UnknownScene(name.to_string()))
    }

    /// Whether a scene name is registered
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Resolve a runtime string (e.g. from a replay header) to the
    /// registered static name.
    #[must_use]
    pub fn static_name(&self, name: &str) -> Option<&'static str> {
        self.factories.get_key_value(name).map(|(key, _)| *key)
    }

    /// Number of registered scenes
    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Whether the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl<S> Default for SceneRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EngineContext;
    use crate::input::InputFrame;
    use crate::render::DrawList;

    struct Dummy;

    impl Scene<()> for Dummy {
        fn name(&self) -> &'static str {
            "dummy"
        }

        fn tick(&mut self, _ctx: &mut EngineContext<()>, _frame: &InputFrame, _dt: f32) {}

        fn draw(&self, _ctx: &EngineContext<()>, _list: &mut DrawList) {}
    }

    #[test]
    fn test_register_and_create() {
        let mut registry: SceneRegistry<()> = SceneRegistry::new();
        registry.register("dummy", || Box::new(Dummy));

        assert!(registry.contains("dummy"));
        let scene = registry.create("dummy").unwrap();
        assert_eq!(scene.name(), "dummy");
    }

    #[test]
    fn test_unknown_scene_is_an_error() {
        let registry: SceneRegistry<()> = SceneRegistry::new();
        let err = registry.create("nope").err().unwrap();
        assert!(matches!(err, SceneError::UnknownScene(name) if name == "nope"));
    }
}
