//! Fixed-rate tick pacing
//!
//! Frames arrive at whatever rate the display runs; the simulation always
//! advances in whole ticks of `1 / tick_rate` seconds.

use crate::consts::MAX_SUBSTEPS;

/// Longest frame delta accepted before clamping (seconds)
const MAX_FRAME_DT: f32 = 0.1;

/// Accumulates real time and hands out whole simulation ticks
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: f32,
    accumulator: f32,
}

impl FixedStep {
    pub fn new(tick_rate: u32) -> Self {
        Self {
            step: 1.0 / tick_rate.max(1) as f32,
            accumulator: 0.0,
        }
    }

    /// Add a frame's worth of time and return how many ticks to run now
    ///
    /// Long stalls are clamped and at most `MAX_SUBSTEPS` ticks run per frame,
    /// so the simulation slows down instead of spiralling.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < MAX_SUBSTEPS {
            self.accumulator -= self.step;
            ticks += 1;
        }
        if ticks == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(self.step);
        }
        ticks
    }
}
