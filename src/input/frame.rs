//! Per-tick input snapshots
//!
//! An `InputFrame` is the unit of replay recording: one serialized frame per
//! simulation tick reproduces the whole run.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::key::Key;

/// Immutable snapshot of keyboard state for one simulation tick
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFrame {
    /// Keys held during this tick, sorted
    down: Vec<Key>,
    /// Keys that went down on this tick, sorted
    pressed: Vec<Key>,
}

impl InputFrame {
    /// Build a frame from live key sets, sorting for deterministic output
    #[must_use]
    pub fn from_sets(down: &HashSet<Key>, pressed: &HashSet<Key>) -> Self {
        let mut down: Vec<Key> = down.iter().copied().collect();
        let mut pressed: Vec<Key> = pressed.iter().copied().collect();
        down.sort();
        pressed.sort();
        Self { down, pressed }
    }

    /// Build a frame from explicit key lists (tests, scripted input)
    #[must_use]
    pub fn from_keys(down: &[Key], pressed: &[Key]) -> Self {
        let mut down = down.to_vec();
        let mut pressed = pressed.to_vec();
        down.sort();
        pressed.sort();
        Self { down, pressed }
    }

    /// Keys held during this tick
    #[must_use]
    pub fn down(&self) -> &[Key] {
        &self.down
    }

    /// Keys that went down on this tick
    #[must_use]
    pub fn pressed(&self) -> &[Key] {
        &self.pressed
    }

    /// Whether a key is held
    #[must_use]
    pub fn is_down(&self, key: Key) -> bool {
        self.down.binary_search(&key).is_ok()
    }

    /// Whether a key went down on this tick
    #[must_use]
    pub fn just_pressed(&self, key: Key) -> bool {
        self.pressed.binary_search(&key).is_ok()
    }

    /// -1/0/+1 axis value from a pair of held keys
    #[must_use]
    pub fn axis(&self, negative: Key, positive: Key) -> f32 {
        let mut value = 0.0;
        if self.is_down(positive) {
            value += 1.0;
        }
        if self.is_down(negative) {
            value -= 1.0;
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_queries() {
        let frame = InputFrame::from_keys(&[Key::W, Key::Up], &[Key::Escape]);

        assert!(frame.is_down(Key::W));
        assert!(!frame.is_down(Key::S));
        assert!(frame.just_pressed(Key::Escape));
        assert!(!frame.just_pressed(Key::W));
    }

    #[test]
    fn test_axis() {
        let frame = InputFrame::from_keys(&[Key::S], &[]);
        assert_eq!(frame.axis(Key::W, Key::S), 1.0);

        let frame = InputFrame::from_keys(&[Key::W], &[]);
        assert_eq!(frame.axis(Key::W, Key::S), -1.0);

        let frame = InputFrame::from_keys(&[Key::W, Key::S], &[]);
        assert_eq!(frame.axis(Key::W, Key::S), 0.0);
    }

    #[test]
    fn test_frame_serializes_stably() {
        let a = InputFrame::from_keys(&[Key::Up, Key::W], &[]);
        let b = InputFrame::from_keys(&[Key::W, Key::Up], &[]);

        // Same keys in any insertion order produce identical RON
        assert_eq!(ron::to_string(&a).unwrap(), ron::to_string(&b).unwrap());
    }
}
