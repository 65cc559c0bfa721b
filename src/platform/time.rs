//! Monotonic clocks

use std::time::Instant;

/// Monotonic time source, sampled once per frame
pub trait Clock {
    /// Seconds since an arbitrary fixed origin
    fn now(&mut self) -> f64;
}

/// Wall clock backed by `Instant`
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&mut self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Clock that advances by a fixed step every time it is read.
/// Drives headless runs and tests at a simulated frame rate.
#[derive(Debug, Clone)]
pub struct FixedStepClock {
    time: f64,
    step: f64,
}

impl FixedStepClock {
    pub fn new(step: f64) -> Self {
        Self { time: 0.0, step }
    }

    /// Clock ticking at `fps` frames per second
    pub fn from_fps(fps: u32) -> Self {
        Self::new(1.0 / fps.max(1) as f64)
    }

    /// Time of the last reading
    pub fn current(&self) -> f64 {
        self.time
    }
}

impl Clock for FixedStepClock {
    fn now(&mut self) -> f64 {
        self.time += self.step;
        self.time
    }
}
