//! Frame scheduler
//!
//! Measures wall-clock time between frames for hosts that run their own loop.

use std::time::{Duration, Instant};

/// Paces a host loop at a target frame rate
#[derive(Debug)]
pub struct FrameScheduler {
    last_frame: Instant,
    target_fps: u32,
}

impl FrameScheduler {
    pub fn new(target_fps: u32) -> Self {
        Self::starting_at(Instant::now(), target_fps)
    }

    /// Create a scheduler whose first frame is measured from `start`
    pub fn starting_at(start: Instant, target_fps: u32) -> Self {
        Self {
            last_frame: start,
            target_fps: target_fps.max(1),
        }
    }

    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }

    /// Duration of one frame at the target rate
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.target_fps
    }

    /// Time since the previous call, measured now
    pub fn delta(&mut self) -> Duration {
        self.delta_at(Instant::now())
    }

    /// Time since the previous call, measured at `now`
    pub fn delta_at(&mut self, now: Instant) -> Duration {
        let dt = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        dt
    }

    /// How long the host may wait before the next frame is due
    pub fn time_until_next_frame(&self, now: Instant) -> Duration {
        let since = now.saturating_duration_since(self.last_frame);
        self.frame_interval().saturating_sub(since)
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new(60)
    }
}
