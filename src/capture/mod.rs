//! Capture hooks: screenshots, video frame dumps and input replays
//!
//! All capture state lives here so scenes only have to push a
//! `GameEvent::CaptureRequested` and the engine does the rest. Screenshots
//! and video frames come out of the render backend's frame readback; replays
//! are recorded per tick from the same input frames the simulation sees.

mod replay;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::RngCore;

use crate::input::InputFrame;

pub use replay::{Replay, ReplayError, ReplayHeader, REPLAY_VERSION};

/// Which capture hook a hotkey triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureKind {
    /// Save the next rendered frame as a PNG
    Screenshot,
    /// Start or stop recording inputs to a replay file
    ToggleReplayRecord,
    /// Start or stop playing back the last saved replay
    ToggleReplayPlay,
    /// Start or stop dumping every rendered frame as a PNG sequence
    ToggleVideo,
}

/// Errors from capture operations
#[derive(Debug)]
pub enum CaptureError {
    /// IO error creating directories or files
    Io(std::io::Error),
    /// PNG encode failure
    Image(image::ImageError),
    /// Replay save/load failure
    Replay(ReplayError),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::Image(e) => write!(f, "Image error: {e}"),
            Self::Replay(e) => write!(f, "Replay error: {e}"),
        }
    }
}

impl std::error::Error for CaptureError {}

impl From<std::io::Error> for CaptureError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<image::ImageError> for CaptureError {
    fn from(e: image::ImageError) -> Self {
        Self::Image(e)
    }
}

impl From<ReplayError> for CaptureError {
    fn from(e: ReplayError) -> Self {
        Self::Replay(e)
    }
}

#[derive(Debug)]
enum ReplayState {
    Idle,
    Recording(Replay),
    Playing { replay: Replay, cursor: usize },
}

/// Capture state owned by the engine context.
///
/// One instance per engine run. Screenshots and video frames are written
/// under the output directory; replays go to a single well-known file so a
/// record hotkey followed by a play hotkey round-trips without any UI.
#[derive(Debug)]
pub struct Capture {
    game_id: String,
    tick_rate: u32,
    output_dir: PathBuf,
    /// Label for the pending screenshot, if one was requested
    screenshot_pending: Option<String>,
    video_frame: Option<u64>,
    replay: ReplayState,
    seed: u64,
}

impl Capture {
    /// Create capture state for a game
    #[must_use]
    pub fn new(game_id: impl Into<String>, tick_rate: u32) -> Self {
        Self {
            game_id: game_id.into(),
            tick_rate,
            output_dir: PathBuf::from("captures"),
            screenshot_pending: None,
            video_frame: None,
            replay: ReplayState::Idle,
            seed: rand::thread_rng().next_u64(),
        }
    }

    /// Override the output directory (default `captures/`)
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Path replays are saved to and played from
    #[must_use]
    pub fn replay_path(&self) -> PathBuf {
        self.output_dir.join("replay.ron")
    }

    /// RNG seed for the current run.
    ///
    /// Freshly randomized when a recording starts, taken from the replay
    /// header when playback starts. Games seed their RNGs from this.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Force the run seed, e.g. for deterministic tests
    pub fn set_seed(&mut self, seed: u64) {
        self.seed = seed;
    }

    // ========================================================================
    // Screenshots and video
    // ========================================================================

    /// Ask for the next rendered frame to be saved as a screenshot.
    ///
    /// The label (usually the current scene name) becomes part of the
    /// filename.
    pub fn request_screenshot(&mut self, label: impl Into<String>) {
        self.screenshot_pending = Some(label.into());
    }

    /// Start or stop the PNG frame sequence dump
    pub fn toggle_video(&mut self) {
        if self.video_frame.is_some() {
            log::info!("Video capture stopped");
            self.video_frame = None;
        } else {
            log::info!("Video capture started");
            self.video_frame = Some(0);
        }
    }

    /// Whether a video dump is in progress
    #[must_use]
    pub fn video_recording(&self) -> bool {
        self.video_frame.is_some()
    }

    /// Whether the renderer should read back the next frame
    #[must_use]
    pub fn wants_frame(&self) -> bool {
        self.screenshot_pending.is_some() || self.video_frame.is_some()
    }

    /// Consume a read-back frame, writing the pending screenshot and/or the
    /// next video frame.
    pub fn store_frame(&mut self, frame: &image::RgbaImage) -> Result<(), CaptureError> {
        if let Some(label) = self.screenshot_pending.take() {
            fs::create_dir_all(&self.output_dir)?;
            let stamp = unix_timestamp();
            let path = self
                .output_dir
                .join(format!("{}_{label}_{stamp}.png", self.game_id));
            frame.save(&path)?;
            log::info!("Screenshot saved to {}", path.display());
        }

        if let Some(index) = self.video_frame {
            let dir = self.output_dir.join("video");
            fs::create_dir_all(&dir)?;
            frame.save(dir.join(format!("frame_{index:05}.png")))?;
            self.video_frame = Some(index + 1);
        }

        Ok(())
    }

    // ========================================================================
    // Replays
    // ========================================================================

    /// Whether inputs are being recorded
    #[must_use]
    pub fn replay_recording(&self) -> bool {
        matches!(self.replay, ReplayState::Recording(_))
    }

    /// Whether a replay is driving the simulation
    #[must_use]
    pub fn replay_playing(&self) -> bool {
        matches!(self.replay, ReplayState::Playing { .. })
    }

    /// Start recording from the given scene with a fresh seed.
    ///
    /// Stops playback if one was running.
    pub fn start_replay_record(&mut self, initial_scene: &str) {
        self.seed = rand::thread_rng().next_u64();
        self.replay = ReplayState::Recording(Replay::new(
            self.game_id.clone(),
            initial_scene,
            self.seed,
            self.tick_rate,
        ));
        log::info!("Replay recording started (seed {})", self.seed);
    }

    /// Stop recording and save the replay file
    pub fn stop_replay_record(&mut self) -> Result<(), CaptureError> {
        let state = std::mem::replace(&mut self.replay, ReplayState::Idle);
        if let ReplayState::Recording(replay) = state {
            fs::create_dir_all(&self.output_dir)?;
            let path = self.replay_path();
            replay.save_ron(&path)?;
            log::info!(
                "Replay saved to {} ({} ticks)",
                path.display(),
                replay.len()
            );
        }
        Ok(())
    }

    /// Load a replay and start feeding its frames to the simulation.
    ///
    /// Returns the header so the caller can restart from the recorded scene
    /// with the recorded seed.
    pub fn start_replay_play(&mut self, path: impl AsRef<Path>) -> Result<ReplayHeader, CaptureError> {
        let replay = Replay::load_ron(path)?;
        let header = replay.header.clone();
        if header.tick_rate != self.tick_rate {
            log::warn!(
                "Replay tick rate {} differs from engine tick rate {}; playback may diverge",
                header.tick_rate,
                self.tick_rate
            );
        }
        self.seed = header.seed;
        log::info!(
            "Replay playback started ({} ticks, seed {})",
            replay.len(),
            header.seed
        );
        self.replay = ReplayState::Playing { replay, cursor: 0 };
        Ok(header)
    }

    /// Stop playback without touching the replay file
    pub fn stop_replay_play(&mut self) {
        if self.replay_playing() {
            log::info!("Replay playback stopped");
            self.replay = ReplayState::Idle;
        }
    }

    /// Record one tick's input frame, if recording
    pub fn record_tick(&mut self, frame: &InputFrame) {
        if let ReplayState::Recording(replay) = &mut self.replay {
            replay.frames.push(frame.clone());
        }
    }

    /// Next playback frame, or `None` once the replay runs out.
    ///
    /// Playback stops automatically at the end.
    pub fn next_playback_frame(&mut self) -> Option<InputFrame> {
        if let ReplayState::Playing { replay, cursor } = &mut self.replay {
            if let Some(frame) = replay.frames.get(*cursor) {
                let frame = frame.clone();
                *cursor += 1;
                return Some(frame);
            }
            log::info!("Replay playback finished");
            self.replay = ReplayState::Idle;
        }
        None
    }
}

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;

    #[test]
    fn test_record_then_play_round_trip() {
        let dir = std::env::temp_dir().join("mini_arcade_capture_test");
        std::fs::create_dir_all(&dir).unwrap();

        let mut capture = Capture::new("test-game", 60).with_output_dir(&dir);
        capture.start_replay_record("pong");
        assert!(capture.replay_recording());
        let recorded_seed = capture.seed();

        capture.record_tick(&InputFrame::from_keys(&[Key::W], &[Key::W]));
        capture.record_tick(&InputFrame::default());
        capture.stop_replay_record().unwrap();
        assert!(!capture.replay_recording());

        let header = capture.start_replay_play(capture.replay_path()).unwrap();
        assert_eq!(header.initial_scene, "pong");
        assert_eq!(header.seed, recorded_seed);
        assert_eq!(capture.seed(), recorded_seed);
        assert!(capture.replay_playing());

        let first = capture.next_playback_frame().unwrap();
        assert!(first.is_down(Key::W));
        assert!(capture.next_playback_frame().is_some());

        // Exhausted: playback ends by itself
        assert!(capture.next_playback_frame().is_none());
        assert!(!capture.replay_playing());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_record_tick_noop_when_idle() {
        let mut capture = Capture::new("test-game", 60);
        capture.record_tick(&InputFrame::default());
        assert!(!capture.replay_recording());
        assert!(capture.next_playback_frame().is_none());
    }

    #[test]
    fn test_video_toggle() {
        let mut capture = Capture::new("test-game", 60);
        assert!(!capture.wants_frame());
        capture.toggle_video();
        assert!(capture.video_recording());
        assert!(capture.wants_frame());
        capture.toggle_video();
        assert!(!capture.wants_frame());
    }

    #[test]
    fn test_screenshot_saved_under_label() {
        let dir = std::env::temp_dir().join("mini_arcade_screenshot_test");
        std::fs::remove_dir_all(&dir).ok();

        let mut capture = Capture::new("test-game", 60).with_output_dir(&dir);
        assert!(!capture.wants_frame());
        capture.request_screenshot("pong");
        assert!(capture.wants_frame());

        let frame = image::RgbaImage::new(4, 4);
        capture.store_frame(&frame).unwrap();
        assert!(!capture.wants_frame(), "pending flag consumed");

        let names: Vec<String> = std::fs::read_dir(&dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names.len(), 1);
        assert!(
            names[0].starts_with("test-game_pong_") && names[0].ends_with(".png"),
            "unexpected screenshot name {names:?}"
        );

        std::fs::remove_dir_all(&dir).ok();
    }
}
