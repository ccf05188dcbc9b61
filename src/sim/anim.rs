//! Cosmetic sprite frame clock
//!
//! Cycles a frame index at a fixed period. It is driven by explicit elapsed
//! time and is never read by the physics step.

use serde::{Deserialize, Serialize};

/// Looping frame counter advanced by elapsed milliseconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameClock {
    frame: u8,
    frames: u8,
    period_ms: u32,
    elapsed_ms: f32,
    running: bool,
}

impl FrameClock {
    pub fn new(frames: u8, period_ms: u32) -> Self {
        Self {
            frame: 0,
            frames: frames.max(1),
            period_ms: period_ms.max(1),
            elapsed_ms: 0.0,
            running: false,
        }
    }

    /// Begin cycling. Calling it again keeps the current phase.
    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current frame index in `0..frames`
    pub fn frame(&self) -> u8 {
        self.frame
    }

    /// Advance by `dt` seconds, stepping one frame per elapsed period
    pub fn advance(&mut self, dt: f32) {
        if !self.running || !dt.is_finite() || dt <= 0.0 {
            return;
        }

        self.elapsed_ms += dt * 1000.0;
        let period = self.period_ms as f32;
        let steps = (self.elapsed_ms / period) as u64;
        self.elapsed_ms %= period;
        self.frame = ((self.frame as u64 + steps) % self.frames as u64) as u8;
    }
}
