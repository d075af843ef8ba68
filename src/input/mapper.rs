//! Input intent mapping
//!
//! Maps physical keys to logical actions so scenes express input in terms of
//! what the player wants to do, and controls can be rebound at runtime.

use rustc_hash::FxHashMap;

use super::frame::InputFrame;
use super::key::Key;

/// Logical input actions that map to game behaviors.
///
/// These represent what the player wants to do, independent of which key
/// triggers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Action {
    // -------------------------------------------------------------------------
    // Paddle movement
    // -------------------------------------------------------------------------
    /// Move the left paddle up
    LeftPaddleUp,
    /// Move the left paddle down
    LeftPaddleDown,
    /// Move the right paddle up
    RightPaddleUp,
    /// Move the right paddle down
    RightPaddleDown,

    // -------------------------------------------------------------------------
    // UI
    // -------------------------------------------------------------------------
    /// Pause / open menu
    Pause,
    /// Confirm / select
    Confirm,
    /// Cancel / back
    Cancel,

    // -------------------------------------------------------------------------
    // Capture hotkeys
    // -------------------------------------------------------------------------
    /// Toggle the ball trail overlay
    ToggleTrail,
    /// Save a screenshot
    Screenshot,
    /// Toggle replay recording
    ReplayRecord,
    /// Toggle replay playback
    ReplayPlay,
    /// Toggle video frame capture
    VideoRecord,
}

/// Maps physical keys to logical actions.
///
/// Supports runtime rebinding and reverse lookup of key-to-action mappings.
#[derive(Debug, Clone)]
pub struct InputMapper {
    /// Key to action bindings
    key_bindings: FxHashMap<Key, Action>,
    /// Reverse lookup: action to keys (for displaying bindings in UI)
    action_keys: FxHashMap<Action, Vec<Key>>,
}

impl InputMapper {
    /// Create an empty input mapper.
    #[must_use]
    pub fn new() -> Self {
        Self {
            key_bindings: FxHashMap::default(),
            action_keys: FxHashMap::default(),
        }
    }

    /// Create an input mapper with the default arcade bindings.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut mapper = Self::new();

        // Left paddle: W/S
        mapper.bind(Key::W, Action::LeftPaddleUp);
        mapper.bind(Key::S, Action::LeftPaddleDown);

        // Right paddle: arrows
        mapper.bind(Key::Up, Action::RightPaddleUp);
        mapper.bind(Key::Down, Action::RightPaddleDown);

        // UI
        mapper.bind(Key::Escape, Action::Pause);
        mapper.bind(Key::Enter, Action::Confirm);
        mapper.bind(Key::Backspace, Action::Cancel);

        // Capture hotkeys
        mapper.bind(Key::T, Action::ToggleTrail);
        mapper.bind(Key::F9, Action::Screenshot);
        mapper.bind(Key::F10, Action::ReplayRecord);
        mapper.bind(Key::F11, Action::ReplayPlay);
        mapper.bind(Key::F12, Action::VideoRecord);

        mapper
    }

    /// Bind a key to an action.
    ///
    /// If the key was previously bound, the old binding is replaced.
    pub fn bind(&mut self, key: Key, action: Action) {
        // Remove old binding for this key
        if let Some(old_action) = self.key_bindings.get(&key)
            && let Some(keys) = self.action_keys.get_mut(old_action)
        {
            keys.retain(|k| *k != key);
        }

        self.key_bindings.insert(key, action);
        self.action_keys.entry(action).or_default().push(key);
    }

    /// Unbind a key.
    pub fn unbind(&mut self, key: Key) {
        if let Some(action) = self.key_bindings.remove(&key)
            && let Some(keys) = self.action_keys.get_mut(&action)
        {
            keys.retain(|k| *k != key);
        }
    }

    /// Get the action for a key.
    #[must_use]
    pub fn get_action(&self, key: Key) -> Option<Action> {
        self.key_bindings.get(&key).copied()
    }

    /// Get all keys bound to an action.
    #[must_use]
    pub fn get_keys(&self, action: Action) -> &[Key] {
        self.action_keys
            .get(&action)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Whether any key bound to the action is held in the frame.
    #[must_use]
    pub fn action_down(&self, frame: &InputFrame, action: Action) -> bool {
        self.get_keys(action).iter().any(|&k| frame.is_down(k))
    }

    /// Whether any key bound to the action went down on this frame.
    #[must_use]
    pub fn action_pressed(&self, frame: &InputFrame, action: Action) -> bool {
        self.get_keys(action).iter().any(|&k| frame.just_pressed(k))
    }

    /// -1/0/+1 axis from a pair of actions.
    #[must_use]
    pub fn action_axis(&self, frame: &InputFrame, negative: Action, positive: Action) -> f32 {
        let mut value = 0.0;
        if self.action_down(frame, positive) {
            value += 1.0;
        }
        if self.action_down(frame, negative) {
            value -= 1.0;
        }
        value
    }

    /// Check if a key is bound to any action.
    #[must_use]
    pub fn is_bound(&self, key: Key) -> bool {
        self.key_bindings.contains_key(&key)
    }

    /// Get total number of bindings.
    #[must_use]
    pub fn binding_count(&self) -> usize {
        self.key_bindings.len()
    }
}

impl Default for InputMapper {
    fn default() -> Self {
        Self::new()
    }
}
