//! Live keyboard state fed by window events

use std::collections::HashSet;

use winit::event::ElementState;

use super::frame::InputFrame;
use super::key::Key;

/// Input state manager
#[derive(Debug, Default)]
pub struct Input {
    /// Currently held keys
    pressed: HashSet<Key>,
    /// Keys that went down since the last tick snapshot
    just_pressed: HashSet<Key>,
    /// Keys that went up since the last tick snapshot
    just_released: HashSet<Key>,
}

impl Input {
    /// Create a new input manager
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a keyboard event
    pub fn process_key(&mut self, key: Key, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if !self.pressed.contains(&key) {
                    self.just_pressed.insert(key);
                }
                self.pressed.insert(key);
            }
            ElementState::Released => {
                self.pressed.remove(&key);
                self.just_released.insert(key);
            }
        }
    }

    /// Check if a key is currently held
    #[must_use]
    pub fn is_down(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    /// Check if a key went down since the last snapshot
    #[must_use]
    pub fn just_pressed(&self, key: Key) -> bool {
        self.just_pressed.contains(&key)
    }

    /// Check if a key went up since the last snapshot
    #[must_use]
    pub fn just_released(&self, key: Key) -> bool {
        self.just_released.contains(&key)
    }

    /// Take a snapshot of the current state for one simulation tick.
    ///
    /// The snapshot is what gets recorded into replays, so its key lists
    /// are sorted for a deterministic serialized form.
    #[must_use]
    pub fn snapshot(&self) -> InputFrame {
        InputFrame::from_sets(&self.pressed, &self.just_pressed)
    }

    /// Clear edge state after a tick consumed it.
    ///
    /// When several fixed ticks run in one rendered frame, only the first
    /// tick observes the just-pressed edges; without this, a single key
    /// press would re-trigger toggles on every catch-up tick.
    pub fn end_tick(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut input = Input::new();

        input.process_key(Key::W, ElementState::Pressed);
        assert!(input.is_down(Key::W));
        assert!(input.just_pressed(Key::W));

        input.end_tick();
        assert!(input.is_down(Key::W));
        assert!(!input.just_pressed(Key::W));

        input.process_key(Key::W, ElementState::Released);
        assert!(!input.is_down(Key::W));
        assert!(input.just_released(Key::W));
    }

    #[test]
    fn test_key_repeat_is_not_just_pressed() {
        let mut input = Input::new();

        input.process_key(Key::S, ElementState::Pressed);
        input.end_tick();
        // OS auto-repeat delivers another press while held
        input.process_key(Key::S, ElementState::Pressed);
        assert!(!input.just_pressed(Key::S));
    }

    #[test]
    fn test_snapshot_is_sorted() {
        let mut input = Input::new();
        input.process_key(Key::Z, ElementState::Pressed);
        input.process_key(Key::A, ElementState::Pressed);
        input.process_key(Key::Up, ElementState::Pressed);

        let frame = input.snapshot();
        let down = frame.down();
        let mut sorted = down.to_vec();
        sorted.sort();
        assert_eq!(down, sorted.as_slice());
    }
}
