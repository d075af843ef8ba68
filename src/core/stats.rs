//! Frame and tick statistics

use std::collections::VecDeque;
use std::time::Duration;

/// Rolling frame statistics tracker
#[derive(Debug)]
pub struct FrameStats {
    /// Frame time history for averaging
    frame_times: VecDeque<Duration>,
    /// Maximum samples to keep
    max_samples: usize,
    /// Current FPS
    fps: f32,
    /// Average frame time in milliseconds
    avg_frame_time_ms: f32,
    /// Total frames rendered
    total_frames: u64,
    /// Total simulation ticks executed
    total_ticks: u64,
}

impl FrameStats {
    /// Create a new frame stats tracker
    #[must_use]
    pub fn new() -> Self {
        Self {
            frame_times: VecDeque::with_capacity(120),
            max_samples: 120,
            fps: 0.0,
            avg_frame_time_ms: 0.0,
            total_frames: 0,
            total_ticks: 0,
        }
    }

    /// Record a rendered frame with the given delta time
    pub fn record_frame(&mut self, delta: Duration) {
        self.total_frames += 1;

        if self.frame_times.len() >= self.max_samples {
            self.frame_times.pop_front();
        }
        self.frame_times.push_back(delta);

        let total: Duration = self.frame_times.iter().sum();
        let total_secs = total.as_secs_f32();
        let count = self.frame_times.len() as f32;

        if total_secs > 0.0 {
            self.avg_frame_time_ms = (total_secs / count) * 1000.0;
            self.fps = count / total_secs;
        } else {
            self.avg_frame_time_ms = 0.0;
            self.fps = 0.0;
        }
    }

    /// Record executed simulation ticks
    pub fn record_ticks(&mut self, ticks: u32) {
        self.total_ticks += u64::from(ticks);
    }

    /// Get current FPS
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Get average frame time in milliseconds
    #[must_use]
    pub fn avg_frame_time_ms(&self) -> f32 {
        self.avg_frame_time_ms
    }

    /// Get total frames rendered
    #[must_use]
    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// Get total simulation ticks executed
    #[must_use]
    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    /// Get a formatted stats string
    #[must_use]
    pub fn format_stats(&self) -> String {
        format!(
            "FPS: {:.1} | Frame: {:.2}ms | Ticks: {}",
            self.fps, self.avg_frame_time_ms, self.total_ticks
        )
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}
