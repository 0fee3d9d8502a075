//! Synthetic sensor signals — smooth periodic base plus bounded jitter.
//!
//! These are display-oriented mock readings, not authoritative data.
//! The contract is: deterministic periodic component, bounded jitter
//! drawn from the injected rng, fixed rounding per channel, so every
//! output stays inside its documented range for any tick.

use crate::{
    geo::{self, GeoPoint},
    rng::SignalRng,
    types::Tick,
};

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Paddler heart rate in whole bpm. Range: [106, 134].
pub fn heart_rate(tick: Tick, rng: &mut SignalRng) -> f64 {
    let base = 120.0 + 10.0 * (tick as f64 / 3.0).sin();
    (base + rng.uniform(-4.0, 4.0)).round()
}

/// River water pH, two decimals. Range: [6.60, 7.40].
pub fn ph(tick: Tick, rng: &mut SignalRng) -> f64 {
    let base = 7.0 + 0.35 * (tick as f64 / 5.0).sin();
    round2(base + rng.uniform(-0.05, 0.05))
}

/// Turbidity in NTU, two decimals, floored at 0.8. Range: [2.40, 4.60].
pub fn turbidity(tick: Tick, rng: &mut SignalRng) -> f64 {
    let base = 3.5 + 0.8 * (tick as f64 / 4.0).sin();
    round2(base + rng.uniform(-0.3, 0.3)).max(0.8)
}

/// Water temperature in °C, one decimal. Range: [16.5, 20.5].
pub fn water_temp(tick: Tick, rng: &mut SignalRng) -> f64 {
    let base = 18.5 + 1.8 * (tick as f64 / 6.0).sin();
    round1(base + rng.uniform(-0.2, 0.2))
}

/// Distance from the current position to the closest threat marker,
/// one decimal. Defined as 0 when no markers exist.
pub fn nearest_threat_km(position: GeoPoint, threats: &[GeoPoint]) -> f64 {
    round1(geo::nearest_distance_km(position, threats))
}

/// Kilometers covered along the route, one decimal, as displayed.
pub fn display_distance_km(total_km: f64, progress: f64) -> f64 {
    round1(total_km * progress)
}
