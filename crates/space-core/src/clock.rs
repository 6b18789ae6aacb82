use crate::constants::MAX_FRAME_DELTA_SEC;
use instant::Instant;
use std::time::Duration;

/// Elapsed/delta bookkeeping for the frame loop.
///
/// `instant::Instant` maps to `performance.now()` on wasm and to
/// `std::time::Instant` natively.
#[derive(Debug)]
pub struct FrameClock {
    last_instant: Instant,
    elapsed: f64,
    delta: f32,
    frame: u64,
    max_delta: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_instant: Instant::now(),
            elapsed: 0.0,
            delta: 0.0,
            frame: 0,
            max_delta: MAX_FRAME_DELTA_SEC,
        }
    }

    pub fn with_max_delta(mut self, max_delta: f32) -> Self {
        self.max_delta = max_delta;
        self
    }

    /// Sample the wall clock. Returns `(elapsed_sec, delta_sec)`.
    pub fn tick(&mut self) -> (f64, f32) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        self.advance(dt)
    }

    /// Step by a known duration (fixed-rate replays, tests).
    pub fn advance(&mut self, dt: Duration) -> (f64, f32) {
        // Long stalls (hidden tab, debugger) would otherwise spin bodies a
        // full turn in one frame.
        let delta = dt.as_secs_f32().min(self.max_delta);
        self.delta = delta;
        self.elapsed += delta as f64;
        self.frame += 1;
        (self.elapsed, self.delta)
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn delta(&self) -> f32 {
        self.delta
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_accumulates_elapsed() {
        let mut clock = FrameClock::new();
        for _ in 0..60 {
            clock.advance(Duration::from_millis(16));
        }
        assert_eq!(clock.frame(), 60);
        assert!((clock.elapsed() - 0.96).abs() < 1e-4, "elapsed {}", clock.elapsed());
    }

    #[test]
    fn long_stall_is_capped() {
        let mut clock = FrameClock::new();
        let (elapsed, delta) = clock.advance(Duration::from_secs(5));
        assert_eq!(delta, MAX_FRAME_DELTA_SEC);
        assert!((elapsed - MAX_FRAME_DELTA_SEC as f64).abs() < 1e-9);
    }

    #[test]
    fn tick_is_non_negative() {
        let mut clock = FrameClock::new();
        let (elapsed, delta) = clock.tick();
        assert!(delta >= 0.0);
        assert!(elapsed >= 0.0);
    }
}
