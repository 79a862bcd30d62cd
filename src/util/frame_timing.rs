//! Repaint-tick pacing.
//!
//! The scroll pipeline derives visual state on the rendering refresh tick,
//! not on the scroll event rate. [`FramePacer`] gates that tick to a target
//! cadence and keeps a smoothed FPS readout for diagnostics.

use web_time::{Duration, Instant};

/// Gates the repaint tick to a target FPS and tracks a smoothed frame rate.
#[derive(Debug, Clone)]
pub struct FramePacer {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last tick timestamp
    last_tick: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FramePacer {
    /// Create a new pacer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            last_tick: Instant::now(),
            smoothed_fps: 60.0, // Reasonable starting estimate
            smoothing: 0.05,
        }
    }

    /// Whether enough time has passed since the last tick to derive and
    /// paint a new frame.
    #[must_use]
    pub fn ready(&self, now: Instant) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        now.saturating_duration_since(self.last_tick)
            >= self.min_frame_duration
    }

    /// Record a completed tick and update the smoothed FPS.
    pub fn tick(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            // Exponential moving average for a stable display value
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Current smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Configured FPS target (0 = unlimited).
    #[must_use]
    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }
}
