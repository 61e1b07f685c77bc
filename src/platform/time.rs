//! Frame clocks

use std::time::{Duration, Instant};

/// Source of per-frame elapsed time
pub trait Clock {
    /// Wait for the next frame boundary and return the seconds since the last call
    fn tick(&mut self) -> f32;
}

/// Real-time clock capped at a target frame rate
///
/// Sleeps out the rest of each frame. Reports the real elapsed time, which can
/// exceed the target when a frame runs long.
#[derive(Debug)]
pub struct FixedRateClock {
    frame: Duration,
    last: Instant,
}

impl FixedRateClock {
    /// `fps` must be non-zero; [`crate::Settings::validate`] rejects 0.
    pub fn new(fps: u32) -> Self {
        assert!(fps > 0, "frame rate must be > 0");
        Self {
            frame: Duration::from_secs_f64(1.0 / f64::from(fps)),
            last: Instant::now(),
        }
    }
}

impl Clock for FixedRateClock {
    fn tick(&mut self) -> f32 {
        let target = self.last + self.frame;
        let now = Instant::now();
        if now < target {
            std::thread::sleep(target - now);
        }
        let now = Instant::now();
        let elapsed = now - self.last;
        self.last = now;
        elapsed.as_secs_f32()
    }
}

/// Constant step, no waiting. For tests and faster-than-real-time runs.
#[derive(Debug, Clone, Copy)]
pub struct SteppedClock {
    pub dt: f32,
}

impl SteppedClock {
    pub fn new(dt: f32) -> Self {
        Self { dt }
    }
}

impl Clock for SteppedClock {
    fn tick(&mut self) -> f32 {
        self.dt
    }
}
