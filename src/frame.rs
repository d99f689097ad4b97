//! Frame timing for the render loop.

use std::time::Instant;

/// Timing passed to each frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTime {
    /// Milliseconds since the previous frame.
    pub delta_ms: f64,
    /// Milliseconds since the clock started.
    pub elapsed_ms: f64,
}

/// Derives [`FrameTime`] values from wall-clock instants.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
}

impl FrameClock {
    /// Start a clock now.
    pub fn new() -> Self {
        Self::started_at(Instant::now())
    }

    /// Start a clock at `start`.
    pub fn started_at(start: Instant) -> Self {
        Self { start, last: start }
    }

    /// Advance to the current instant.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advance to `now`. Instants earlier than the previous tick count as
    /// zero elapsed time.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let delta = now.saturating_duration_since(self.last);
        let elapsed = now.saturating_duration_since(self.start);
        if now > self.last {
            self.last = now;
        }
        FrameTime {
            delta_ms: delta.as_secs_f64() * 1000.0,
            elapsed_ms: elapsed.as_secs_f64() * 1000.0,
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
