//! Replay files: recorded per-tick input for deterministic playback
//!
//! A replay stores the header needed to recreate the run (game id, starting
//! scene, RNG seed, tick rate) plus one [`InputFrame`] per simulation tick.
//! Files are RON so they stay hand-editable.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::input::InputFrame;

/// Current replay file format version
pub const REPLAY_VERSION: u32 = 1;

/// Errors that can occur during replay save/load operations
#[derive(Debug)]
pub enum ReplayError {
    /// IO error (file not found, permissions, etc.)
    Io(std::io::Error),
    /// Failed to serialize replay data
    Serialize(String),
    /// Failed to deserialize replay data
    Deserialize(String),
    /// Replay was written by an incompatible format version
    VersionMismatch {
        /// Version found in the file
        found: u32,
    },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::Serialize(e) => write!(f, "Serialization error: {e}"),
            Self::Deserialize(e) => write!(f, "Deserialization error: {e}"),
            Self::VersionMismatch { found } => {
                write!(f, "Unsupported replay version {found} (expected {REPLAY_VERSION})")
            }
        }
    }
}

impl std::error::Error for ReplayError {}

impl From<std::io::Error> for ReplayError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Metadata needed to reproduce a recorded run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayHeader {
    /// Replay file format version
    pub version: u32,
    /// Identifier of the game the replay belongs to
    pub game_id: String,
    /// Scene that was active when recording started
    pub initial_scene: String,
    /// RNG seed for the run
    pub seed: u64,
    /// Simulation ticks per second when recorded
    pub tick_rate: u32,
}

/// A recorded run: header plus one input frame per tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Replay {
    /// Run metadata
    pub header: ReplayHeader,
    /// Input frames, indexed by tick from recording start
    pub frames: Vec<InputFrame>,
}

impl Replay {
    /// Create an empty replay for a new recording
    #[must_use]
    pub fn new(game_id: impl Into<String>, initial_scene: impl Into<String>, seed: u64, tick_rate: u32) -> Self {
        Self {
            header: ReplayHeader {
                version: REPLAY_VERSION,
                game_id: game_id.into(),
                initial_scene: initial_scene.into(),
                seed,
                tick_rate,
            },
            frames: Vec::new(),
        }
    }

    /// Number of recorded ticks
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether no ticks were recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Save the replay as pretty-printed RON
    pub fn save_ron(&self, path: impl AsRef<Path>) -> Result<(), ReplayError> {
        let ron_string =
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ReplayError::Serialize(e.to_string()))?;
        fs::write(path, ron_string)?;
        Ok(())
    }

    /// Load a replay from a RON file
    pub fn load_ron(path: impl AsRef<Path>) -> Result<Self, ReplayError> {
        let contents = fs::read_to_string(path)?;
        let replay: Self =
            ron::from_str(&contents).map_err(|e| ReplayError::Deserialize(e.to_string()))?;
        if replay.header.version != REPLAY_VERSION {
            return Err(ReplayError::VersionMismatch {
                found: replay.header.version,
            });
        }
        Ok(replay)
    }

    /// Save the replay as pretty-printed JSON
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), ReplayError> {
        let json_string = serde_json::to_string_pretty(self)
            .map_err(|e| ReplayError::Serialize(e.to_string()))?;
        fs::write(path, json_string)?;
        Ok(())
    }

    /// Load a replay from a JSON file
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ReplayError> {
        let contents = fs::read_to_string(path)?;
        let replay: Self = serde_json::from_str(&contents)
            .map_err(|e| ReplayError::Deserialize(e.to_string()))?;
        if replay.header.version != REPLAY_VERSION {
            return Err(ReplayError::VersionMismatch {
                found: replay.header.version,
            });
        }
        Ok(replay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;

    fn sample_replay() -> Replay {
        let mut replay = Replay::new("deja-bounce", "pong", 42, 60);
        replay.frames.push(InputFrame::from_keys(&[Key::W], &[Key::W]));
        replay.frames.push(InputFrame::from_keys(&[Key::W], &[]));
        replay.frames.push(InputFrame::default());
        replay
    }

    #[test]
    fn test_save_load_round_trip() {
        let replay = sample_replay();
        let dir = std::env::temp_dir().join("mini_arcade_replay_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("round_trip.ron");

        replay.save_ron(&path).unwrap();
        let loaded = Replay::load_ron(&path).unwrap();

        assert_eq!(loaded, replay);
        assert_eq!(loaded.header.seed, 42);
        assert_eq!(loaded.len(), 3);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_json_round_trip() {
        let replay = sample_replay();
        let dir = std::env::temp_dir().join("mini_arcade_replay_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("round_trip.json");

        replay.save_json(&path).unwrap();
        let loaded = Replay::load_json(&path).unwrap();
        assert_eq!(loaded, replay);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_missing_file() {
        let result = Replay::load_ron("/nonexistent/replay.ron");
        assert!(matches!(result, Err(ReplayError::Io(_))));
    }

    #[test]
    fn test_version_check() {
        let mut replay = sample_replay();
        replay.header.version = 99;

        let dir = std::env::temp_dir().join("mini_arcade_replay_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad_version.ron");
        replay.save_ron(&path).unwrap();

        let result = Replay::load_ron(&path);
        assert!(matches!(
            result,
            Err(ReplayError::VersionMismatch { found: 99 })
        ));

        std::fs::remove_file(&path).ok();
    }
}
