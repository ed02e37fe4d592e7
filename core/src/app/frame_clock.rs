//! Fixed-rate frame scheduling

use std::time::{Duration, Instant};

/// Target frame rate
pub const TARGET_FPS: u32 = 60;

/// Longest frame delta reported to the update, in seconds.
///
/// A stall (window drag, debugger break) otherwise turns into one huge edit.
pub const MAX_FRAME_SECONDS: f32 = 0.25;

/// Paces frames at [`TARGET_FPS`] and measures the time between them.
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_duration: Duration,
    last_frame: Option<Instant>,
    next_frame: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(TARGET_FPS)
    }
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self {
            frame_duration: Duration::from_secs_f64(1.0 / f64::from(fps.max(1))),
            last_frame: None,
            next_frame: Instant::now(),
        }
    }

    /// Start a frame now and return the seconds since the previous one.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Start a frame at `now`. The first frame reports one nominal frame.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let elapsed = match self.last_frame {
            Some(last) => now.saturating_duration_since(last).as_secs_f32(),
            None => self.frame_duration.as_secs_f32(),
        };
        self.last_frame = Some(now);

        // Don't try to catch up after a stall
        self.next_frame = (self.next_frame + self.frame_duration).max(now);

        elapsed.min(MAX_FRAME_SECONDS)
    }

    /// When the next frame should start
    pub fn next_frame_time(&self) -> Instant {
        self.next_frame
    }
}
