//! Deterministic random number generation.
//!
//! RULE: Nothing in the engine may call any platform RNG.
//! All jitter flows through SignalRng instances derived from the
//! single master seed the engine was built with.
//!
//! Each signal channel gets its own stream, re-derived per tick from
//! (master_seed, channel_index, tick). This means:
//!   - Adding a new channel never changes existing channels' streams.
//!   - Any single tick's jitter is fully reproducible in isolation.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

use crate::types::Tick;

/// A named, deterministic jitter source for one signal channel at one tick.
pub struct SignalRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl SignalRng {
    /// Derive the stream for (master_seed, channel_index, tick).
    /// Channel indices must never change once assigned.
    pub fn new(master_seed: u64, channel_index: u64, tick: Tick) -> Self {
        let derived = master_seed
            ^ channel_index.wrapping_mul(0x9e37_79b9_7f4a_7c15)
            ^ tick.wrapping_mul(0xbf58_476d_1ce4_e5b9);
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived),
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a float in [lo, hi) — the bounded jitter primitive.
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }
}

/// All signal RNGs for a single run, indexed by stable channel.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn for_channel(&self, channel: SignalChannel, tick: Tick) -> SignalRng {
        SignalRng::new(self.master_seed, channel as u64, tick).with_name(channel.name())
    }
}

/// Stable channel index assignments.
/// NEVER reorder or remove entries — only append.
/// Reordering changes every channel's jitter stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum SignalChannel {
    HeartRate = 0,
    Ph = 1,
    Turbidity = 2,
    WaterTemp = 3,
    // Add new channels here — append only.
}

impl SignalChannel {
    pub fn name(&self) -> &'static str {
        match self {
            Self::HeartRate => "heart_rate",
            Self::Ph => "ph",
            Self::Turbidity => "turbidity",
            Self::WaterTemp => "water_temp",
        }
    }
}
