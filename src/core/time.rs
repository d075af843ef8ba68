//! Time keeping and the fixed simulation timestep

use std::time::{Duration, Instant};

/// Wall-clock time tracking for the main loop
#[derive(Debug)]
pub struct Time {
    start: Instant,
    last: Instant,
    delta: Duration,
    /// Simulation ticks executed so far
    tick: u64,
}

impl Time {
    /// Create a new time tracker
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
            delta: Duration::ZERO,
            tick: 0,
        }
    }

    /// Advance to the current instant, returning the frame delta in seconds
    pub fn update(&mut self) -> f32 {
        let now = Instant::now();
        self.delta = now - self.last;
        self.last = now;
        self.delta.as_secs_f32()
    }

    /// Delta of the last frame
    #[must_use]
    pub fn delta(&self) -> Duration {
        self.delta
    }

    /// Delta of the last frame in seconds
    #[must_use]
    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Seconds since the engine started
    #[must_use]
    pub fn elapsed_seconds(&self) -> f32 {
        (self.last - self.start).as_secs_f32()
    }

    /// Index of the current simulation tick
    #[must_use]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Count one executed simulation tick
    pub fn advance_tick(&mut self) {
        self.tick += 1;
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed timestep accumulator.
///
/// Frame deltas are accumulated and converted into a whole number of
/// simulation ticks of exactly `1 / tick_rate` seconds each. Replay
/// determinism depends on every tick seeing the same dt.
#[derive(Debug)]
pub struct FixedTimestep {
    dt: f32,
    accumulator: f32,
    max_ticks_per_frame: u32,
}

impl FixedTimestep {
    /// Upper bound of ticks executed for a single frame. Excess time is
    /// dropped so a long stall cannot snowball into a death spiral.
    const DEFAULT_MAX_TICKS: u32 = 5;

    /// Create a timestep for the given tick rate (ticks per second)
    #[must_use]
    pub fn new(tick_rate: u32) -> Self {
        Self {
            dt: 1.0 / tick_rate.max(1) as f32,
            accumulator: 0.0,
            max_ticks_per_frame: Self::DEFAULT_MAX_TICKS,
        }
    }

    /// Seconds per tick
    #[must_use]
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Feed a frame delta, returning how many fixed ticks to run
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.max(0.0);

        let mut ticks = 0;
        while self.accumulator >= self.dt && ticks < self.max_ticks_per_frame {
            self.accumulator -= self.dt;
            ticks += 1;
        }

        // Drop whatever could not be simulated this frame
        if ticks == self.max_ticks_per_frame {
            self.accumulator = 0.0;
        }

        ticks
    }

    /// Discard accumulated time, e.g. after a scene change
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_timestep_accumulates() {
        let mut ts = FixedTimestep::new(60);
        let dt = ts.dt();

        // Half a tick: nothing to run yet
        assert_eq!(ts.advance(dt * 0.5), 0);
        // The other half arrives
        assert_eq!(ts.advance(dt * 0.5), 1);
    }

    #[test]
    fn test_fixed_timestep_multiple_ticks() {
        let mut ts = FixedTimestep::new(60);
        let dt = ts.dt();

        assert_eq!(ts.advance(dt * 3.0 + dt * 0.25), 3);
        // Remainder carries over
        assert_eq!(ts.advance(dt * 0.75), 1);
    }

    #[test]
    fn test_fixed_timestep_clamps_stalls() {
        let mut ts = FixedTimestep::new(60);

        // A two second stall must not produce 120 ticks
        let ticks = ts.advance(2.0);
        assert_eq!(ticks, FixedTimestep::DEFAULT_MAX_TICKS);

        // And the backlog is gone
        assert_eq!(ts.advance(0.0), 0);
    }

    #[test]
    fn test_time_counts_ticks() {
        let mut time = Time::new();
        assert_eq!(time.tick(), 0);
        time.advance_tick();
        time.advance_tick();
        assert_eq!(time.tick(), 2);
    }
}
