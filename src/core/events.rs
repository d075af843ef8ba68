//! Event Queue for Decoupled Communication
//!
//! Systems in the simulation pipeline talk to the owning scene (and through
//! it to audio, capture and the scene stack) by pushing events instead of
//! holding references to those services. The queue is double buffered:
//! events pushed during one tick become visible after the next `swap()`,
//! so processing order never depends on system order.

use std::collections::VecDeque;

use crate::capture::CaptureKind;

/// Which side of the playfield an event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Left player
    Left,
    /// Right player
    Right,
}

/// What a collision event hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// Top or bottom playfield wall
    Wall,
    /// The left paddle
    PaddleLeft,
    /// The right paddle
    PaddleRight,
}

/// Game events for system-to-scene communication.
///
/// Events represent things that happened during a simulation tick. They flow
/// from producers (pipeline systems) to consumers (the scene, audio, capture)
/// without direct coupling.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum GameEvent {
    /// Something collided during this tick.
    Collision {
        /// What was hit
        kind: CollisionKind,
    },

    /// A player scored.
    ScoreChanged {
        /// Side that scored
        side: Side,
        /// Their new score
        score: u32,
    },

    /// Request to play a loaded sound effect.
    PlaySound {
        /// Sound asset name
        name: &'static str,
        /// Volume multiplier (0.0 to 1.0)
        volume: f32,
    },

    /// The simulation asked for the pause overlay.
    PauseRequested,

    /// A capture hook was triggered by a hotkey.
    CaptureRequested(CaptureKind),
}

/// Double-buffered event queue for tick-consistent event processing.
///
/// Events pushed during tick N are readable during tick N+1, after `swap()`.
#[derive(Debug)]
pub struct EventQueue {
    /// Events being written this tick
    pending: VecDeque<GameEvent>,
    /// Events from the previous tick, ready for processing
    processing: VecDeque<GameEvent>,
}

impl EventQueue {
    /// Default initial capacity for event queues.
    const DEFAULT_CAPACITY: usize = 64;

    /// Create a new event queue with default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create a new event queue with the given initial capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pending: VecDeque::with_capacity(capacity),
            processing: VecDeque::with_capacity(capacity),
        }
    }

    /// Push an event to be processed next tick.
    #[inline]
    pub fn push(&mut self, event: GameEvent) {
        self.pending.push_back(event);
    }

    /// Swap the pending and processing queues.
    ///
    /// Call once per tick, before reading. After swapping, `iter()` and
    /// `drain()` return events pushed during the previous tick.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.pending, &mut self.processing);
        self.pending.clear();
    }

    /// Iterate over events from the previous tick.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.processing.iter()
    }

    /// Drain all events from the previous tick.
    #[inline]
    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.processing.drain(..)
    }

    /// Check if there are events ready for processing.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.processing.is_empty()
    }

    /// Number of events ready for processing.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.processing.len()
    }

    /// Number of events waiting for the next swap.
    #[must_use]
    #[inline]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Clear all events, pending and processing.
    ///
    /// Useful on scene transitions so a new scene never sees stale events.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.processing.clear();
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}
