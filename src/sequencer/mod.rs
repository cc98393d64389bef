//! Animation sequencer: actor motion, trail recording and the
//! completion/hold/reset state machine.
//!
//! The sequencer is pure state-plus-arithmetic; it draws nothing and
//! never reads the clock itself. The frame loop samples [`FrameClock`]
//! once per frame and feeds the same reading to every update.

pub mod actor;
pub mod constants;
pub mod gate;
pub mod state;
pub mod trail;

pub use state::{DrawList, SequencerState};

use std::time::Instant;

/// Monotonic millisecond clock for the frame loop, plus FPS sampling.
#[derive(Debug, Clone)]
pub struct FrameClock {
    epoch: Instant,
    last_ms: f64,
    frame_count: u64,
    last_fps_instant: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            epoch: now,
            last_ms: 0.0,
            frame_count: 0,
            last_fps_instant: now,
        }
    }

    /// Samples the clock once for this frame, returning
    /// `(now_ms, delta_ms)` against the previous tick.
    pub fn tick(&mut self) -> (f64, f64) {
        let now_ms = self.epoch.elapsed().as_secs_f64() * 1000.0;
        let delta_ms = now_ms - self.last_ms;
        self.last_ms = now_ms;
        self.frame_count += 1;
        (now_ms, delta_ms)
    }

    /// Once a second, returns the frame rate since the last sample.
    pub fn fps_sample(&mut self) -> Option<f32> {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_fps_instant).as_secs_f32();
        if elapsed >= 1.0 {
            let fps = self.frame_count as f32 / elapsed;
            self.frame_count = 0;
            self.last_fps_instant = now;
            Some(fps)
        } else {
            None
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_is_monotonic() {
        let mut clock = FrameClock::new();
        let (first, _) = clock.tick();
        let (second, delta) = clock.tick();
        assert!(second >= first);
        assert!(delta >= 0.0);
        assert!((second - first - delta).abs() < 1e-9);
    }
}
