//! Rolling telemetry window for the dashboard chart.

use crate::types::Tick;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Samples retained for charting.
pub const HISTORY_CAPACITY: usize = 30;

/// One charted reading. Immutable once appended — the chart window
/// carries only the two charted channels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySample {
    pub tick: Tick,
    pub heart_rate: f64,
    pub ph: f64,
}

/// Fixed-capacity rolling buffer of samples, oldest evicted first.
/// Insertion order is chronological order.
#[derive(Debug, Clone)]
pub struct TelemetryHistory {
    samples: VecDeque<TelemetrySample>,
    capacity: usize,
}

impl TelemetryHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, evicting from the front once the window is full.
    pub fn push(&mut self, sample: TelemetrySample) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    /// The full retained window in chronological order.
    pub fn samples(&self) -> impl Iterator<Item = &TelemetrySample> {
        self.samples.iter()
    }

    pub fn to_vec(&self) -> Vec<TelemetrySample> {
        self.samples.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl Default for TelemetryHistory {
    fn default() -> Self {
        Self::new(HISTORY_CAPACITY)
    }
}
