//! Audio playback for short sound effects
//!
//! Built on top of the rodio audio library. Effects are cached as encoded
//! bytes and decoded per play, so overlapping plays of the same sound just
//! work. Machines without an audio device get a silent manager instead of a
//! startup failure.

use std::collections::HashMap;
use std::fmt;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, mixer::Mixer};

/// Errors from audio loading
#[derive(Debug)]
pub enum AudioError {
    /// Sound file could not be read
    Io(String),
    /// Sound data could not be decoded
    Decode(String),
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::Decode(e) => write!(f, "Decode error: {e}"),
        }
    }
}

impl std::error::Error for AudioError {}

/// A loaded sound: its encoded bytes, base volume and live plays
struct Sound {
    /// Encoded bytes, decoded fresh for every play
    bytes: Arc<[u8]>,
    /// Per-source volume, applied under the master volume
    volume: f32,
    /// Sinks of plays still in flight, pruned lazily
    sinks: Vec<Sink>,
}

/// Manages the output device and named sound effects
pub struct AudioManager {
    /// The output stream (must be kept alive); `None` when no device exists
    _stream: Option<OutputStream>,
    /// The mixer one-shot sinks connect to
    mixer: Option<Mixer>,
    /// Loaded sounds by name
    sounds: HashMap<String, Sound>,
    /// Master volume applied to every play
    master_volume: f32,
    /// Whether audio is muted
    muted: bool,
}

impl AudioManager {
    /// Create an audio manager.
    ///
    /// If no output device is available the manager still works, it just
    /// plays nothing.
    #[must_use]
    pub fn new() -> Self {
        let stream = OutputStreamBuilder::from_default_device()
            .and_then(|builder| builder.open_stream());

        let (stream, mixer) = match stream {
            Ok(stream) => {
                let mixer = stream.mixer().clone();
                (Some(stream), Some(mixer))
            }
            Err(e) => {
                log::warn!("No audio output device, sound disabled: {e}");
                (None, None)
            }
        };

        Self {
            _stream: stream,
            mixer,
            sounds: HashMap::new(),
            master_volume: 1.0,
            muted: false,
        }
    }

    /// Load a sound file and store it with a name
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not decodable.
    pub fn load(
        &mut self,
        name: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> Result<(), AudioError> {
        let bytes = std::fs::read(path.as_ref()).map_err(|e| AudioError::Io(e.to_string()))?;
        self.load_bytes(name, bytes.into())
    }

    /// Store encoded sound bytes with a name (e.g. from `include_bytes!`)
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not decodable.
    pub fn load_bytes(
        &mut self,
        name: impl Into<String>,
        bytes: Arc<[u8]>,
    ) -> Result<(), AudioError> {
        // Decode once up front so bad assets fail at load, not mid-game
        Decoder::new(Cursor::new(Arc::clone(&bytes)))
            .map_err(|e| AudioError::Decode(e.to_string()))?;
        self.sounds.insert(
            name.into(),
            Sound {
                bytes,
                volume: 1.0,
                sinks: Vec::new(),
            },
        );
        Ok(())
    }

    /// Play a loaded sound once at the given volume.
    ///
    /// The effective volume is `volume * source volume * master volume`.
    /// Returns `false` if the name is unknown. Unknown names and missing
    /// devices are not errors, a bounce that makes no sound is fine.
    pub fn play(&mut self, name: &str, volume: f32) -> bool {
        let master = self.master_volume;
        let muted = self.muted;
        let Some(mixer) = &self.mixer else {
            return self.sounds.contains_key(name);
        };
        let Some(sound) = self.sounds.get_mut(name) else {
            log::debug!("Unknown sound: {name}");
            return false;
        };
        sound.sinks.retain(|sink| !sink.empty());
        if muted {
            return true;
        }

        match Decoder::new(Cursor::new(Arc::clone(&sound.bytes))) {
            Ok(source) => {
                let sink = Sink::connect_new(mixer);
                sink.set_volume((volume * sound.volume * master).max(0.0));
                sink.append(source);
                sound.sinks.push(sink);
            }
            Err(e) => log::error!("Failed to decode sound {name}: {e}"),
        }
        true
    }

    /// Stop all in-flight plays of a sound.
    ///
    /// Returns `false` if the name is unknown.
    pub fn stop(&mut self, name: &str) -> bool {
        let Some(sound) = self.sounds.get_mut(name) else {
            return false;
        };
        for sink in sound.sinks.drain(..) {
            sink.stop();
        }
        true
    }

    /// Stop every in-flight play
    pub fn stop_all(&mut self) {
        for sound in self.sounds.values_mut() {
            for sink in sound.sinks.drain(..) {
                sink.stop();
            }
        }
    }

    /// Set the base volume of a sound (applied to subsequent plays).
    ///
    /// Returns `false` if the name is unknown.
    pub fn set_volume(&mut self, name: &str, volume: f32) -> bool {
        let Some(sound) = self.sounds.get_mut(name) else {
            return false;
        };
        sound.volume = volume.max(0.0);
        true
    }

    /// The base volume of a sound, if loaded
    #[must_use]
    pub fn volume(&self, name: &str) -> Option<f32> {
        self.sounds.get(name).map(|sound| sound.volume)
    }

    /// Set the master volume (affects every subsequent play)
    pub fn set_master_volume(&mut self, volume: f32) {
        self.master_volume = volume.max(0.0);
    }

    /// Get the master volume
    #[must_use]
    pub const fn master_volume(&self) -> f32 {
        self.master_volume
    }

    /// Mute all audio
    pub fn mute(&mut self) {
        self.muted = true;
        self.stop_all();
    }

    /// Unmute all audio
    pub fn unmute(&mut self) {
        self.muted = false;
    }

    /// Toggle mute state
    pub fn toggle_mute(&mut self) {
        if self.muted {
            self.unmute();
        } else {
            self.mute();
        }
    }

    /// Check if audio is muted
    #[must_use]
    pub const fn is_muted(&self) -> bool {
        self.muted
    }

    /// Number of loaded sounds
    #[must_use]
    pub fn sound_count(&self) -> usize {
        self.sounds.len()
    }
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}
