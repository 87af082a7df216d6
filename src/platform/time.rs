//! Fixed-timestep accumulator
//!
//! Wall-clock frame deltas go in, whole simulation steps come out. Large
//! deltas (debugger pauses, window drags) are clamped and the number of
//! substeps per frame is capped so a slow frame cannot snowball.

use crate::consts::{FRAME_DT, MAX_SUBSTEPS};

/// Longest wall-clock delta accepted per frame
const MAX_FRAME_DELTA: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct FixedStep {
    step: f32,
    max_substeps: u32,
    accumulator: f32,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(FRAME_DT, MAX_SUBSTEPS)
    }
}

impl FixedStep {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            step,
            max_substeps,
            accumulator: 0.0,
        }
    }

    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Add a frame's wall-clock delta and return how many steps to run
    pub fn advance(&mut self, frame_delta: f32) -> u32 {
        self.accumulator += frame_delta.clamp(0.0, MAX_FRAME_DELTA);

        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_substeps {
            self.accumulator -= self.step;
            steps += 1;
        }
        if steps == self.max_substeps {
            // Drop the backlog rather than carrying it into the next frame
            self.accumulator = self.accumulator.min(self.step);
        }
        steps
    }
}
