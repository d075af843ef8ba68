//! Cheat code sequence tracking
//!
//! Watches just-pressed keys for registered sequences ("GOD", "SLOW", ...)
//! and reports which cheats fired this tick.

use super::key::Key;

/// A registered cheat sequence
#[derive(Debug)]
struct Cheat {
    name: &'static str,
    sequence: Vec<Key>,
    /// How far into the sequence the player currently is
    progress: usize,
}

/// Tracks typed key sequences and fires named cheats on a full match
#[derive(Debug, Default)]
pub struct CheatTracker {
    cheats: Vec<Cheat>,
}

impl CheatTracker {
    /// Create an empty tracker
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a cheat sequence under a name.
    ///
    /// Empty sequences are ignored.
    pub fn register(&mut self, name: &'static str, sequence: &[Key]) {
        if sequence.is_empty() {
            return;
        }
        self.cheats.push(Cheat {
            name,
            sequence: sequence.to_vec(),
            progress: 0,
        });
    }

    /// Feed the keys pressed this tick, returning the cheats that completed.
    ///
    /// A wrong key resets that cheat's progress; matching restarts
    /// immediately if the wrong key is itself the sequence start.
    pub fn feed(&mut self, pressed: &[Key]) -> Vec<&'static str> {
        let mut fired = Vec::new();

        for &key in pressed {
            for cheat in &mut self.cheats {
                if cheat.sequence[cheat.progress] == key {
                    cheat.progress += 1;
                    if cheat.progress == cheat.sequence.len() {
                        cheat.progress = 0;
                        fired.push(cheat.name);
                    }
                } else {
                    cheat.progress = usize::from(cheat.sequence[0] == key);
                }
            }
        }

        fired
    }

    /// Number of registered cheats
    #[must_use]
    pub fn len(&self) -> usize {
        self.cheats.len()
    }

    /// Whether no cheats are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cheats.is_empty()
    }
}
