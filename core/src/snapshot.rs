//! The published per-tick snapshot.
//!
//! Every field is computed from the same tick and published as one
//! value — consumers never see a position from one tick next to
//! metrics from another.

use crate::{geo::GeoPoint, telemetry::TelemetrySample, types::Tick};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpeditionSnapshot {
    pub tick: Tick,
    pub position: GeoPoint,
    pub distance_km: f64,
    pub heart_rate: f64,
    pub ph: f64,
    pub turbidity: f64,
    pub water_temp: f64,
    pub nearest_threat_km: f64,
    pub last_updated: DateTime<Utc>,
    /// Chart window, chronological order, at most the configured capacity.
    pub history: Vec<TelemetrySample>,
}
