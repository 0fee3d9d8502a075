//! Progress clock — owns the tick counter and route progress fraction.
//!
//! This is the sole mutation point for progress state. Everything else
//! in the engine is a pure function of the clock's output.

use crate::types::Tick;
use serde::{Deserialize, Serialize};

/// Fraction of the route covered per tick.
pub const DEFAULT_STEP_DELTA: f64 = 0.055;

/// Real-time cadence between ticks, enforced by the driver.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 2000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressClock {
    pub current_tick: Tick,
    /// Normalized position along the route, always in [0, 1).
    pub progress: f64,
    step: f64,
}

impl ProgressClock {
    pub fn new(step: f64) -> Self {
        Self {
            current_tick: 0,
            progress: 0.0,
            step,
        }
    }

    /// Advance one tick. Returns the new tick number.
    ///
    /// Progress moves forward by the configured step and wraps by
    /// subtracting 1 when it exceeds 1 — the route loops continuously
    /// and never reaches exactly 1.
    pub fn advance(&mut self) -> Tick {
        self.current_tick += 1;
        let next = self.progress + self.step;
        self.progress = if next > 1.0 { next - 1.0 } else { next };
        self.current_tick
    }
}

impl Default for ProgressClock {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_DELTA)
    }
}
