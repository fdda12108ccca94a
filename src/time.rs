//! Frame timing from a monotonic tick count.
//!
//! Ticks are measured from when the clock was created. The first delta is
//! therefore the whole time since start, and stalls are passed through
//! unclamped.

use instant::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct TickClock {
    start: Instant,
    last_ticks: f32,
}

impl TickClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            last_ticks: 0.0,
        }
    }

    /// Time since the clock was created.
    pub fn ticks(&self) -> Duration {
        self.start.elapsed()
    }

    /// Seconds between `ticks` and the previous call.
    pub fn delta(&mut self, ticks: Duration) -> f32 {
        let ticks = ticks.as_millis() as f32 / 1000.0;
        let dt = ticks - self.last_ticks;
        self.last_ticks = ticks;
        dt
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}
