//! Frame timing utilities

use std::time::{Duration, Instant};

/// Source of per-frame delta times
///
/// A real-time clock measures wall time between ticks; a fixed-step clock
/// reports the same delta every tick, which is what headless sessions and
/// tests use to get reproducible animation.
#[derive(Debug, Clone)]
pub struct FrameClock {
    mode: ClockMode,
    delta_time: f32,
    total_time: f64,
    frame_count: u64,
}

#[derive(Debug, Clone)]
enum ClockMode {
    RealTime { last_frame: Instant },
    FixedStep { step: f32 },
}

impl FrameClock {
    /// Create a clock that measures wall time between ticks
    pub fn real_time() -> Self {
        Self::with_mode(ClockMode::RealTime { last_frame: Instant::now() })
    }

    /// Create a clock that advances by `refresh_rate⁻¹` seconds every tick
    pub fn fixed_rate(refresh_rate: u32) -> Self {
        let step = 1.0 / refresh_rate.max(1) as f32;
        Self::with_mode(ClockMode::FixedStep { step })
    }

    fn with_mode(mode: ClockMode) -> Self {
        Self {
            mode,
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Advance the clock by one frame and return the new delta in seconds
    pub fn tick(&mut self) -> f32 {
        self.delta_time = match &mut self.mode {
            ClockMode::RealTime { last_frame } => {
                let now = Instant::now();
                let elapsed = now.duration_since(*last_frame);
                *last_frame = now;
                elapsed.as_secs_f32()
            }
            ClockMode::FixedStep { step } => *step,
        };
        self.total_time += f64::from(self.delta_time);
        self.frame_count += 1;
        self.delta_time
    }

    /// Time since the previous tick in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Total simulated or elapsed time
    pub fn total_time(&self) -> Duration {
        Duration::from_secs_f64(self.total_time)
    }

    /// Number of ticks so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
