//! Expedition configuration — the route, threat reference set, and
//! timing constants.
//!
//! The engine treats all of this as externally supplied: the built-in
//! default is the Zambezi source expedition, and a JSON file with the
//! same shape can replace it wholesale.

use crate::{
    clock::{DEFAULT_STEP_DELTA, DEFAULT_TICK_INTERVAL_MS},
    error::{SimError, SimResult},
    geo::GeoPoint,
    telemetry::HISTORY_CAPACITY,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreatCategory {
    Deforestation,
    Fire,
    Logging,
}

/// Static, read-only environmental threat reference point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatMarker {
    pub position: GeoPoint,
    pub label: String,
    pub category: ThreatCategory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpeditionConfig {
    #[serde(default = "default_interval_ms")]
    pub tick_interval_ms: u64,
    #[serde(default = "default_step_delta")]
    pub step_delta: f64,
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
    pub route: Vec<GeoPoint>,
    #[serde(default)]
    pub threats: Vec<ThreatMarker>,
}

fn default_interval_ms() -> u64 {
    DEFAULT_TICK_INTERVAL_MS
}

fn default_step_delta() -> f64 {
    DEFAULT_STEP_DELTA
}

fn default_history_capacity() -> usize {
    HISTORY_CAPACITY
}

impl ExpeditionConfig {
    /// Parse a config from JSON. A route must contain at least one
    /// point; a single-point route is legal (degenerate, the engine
    /// stays pinned to it).
    pub fn from_json(json: &str) -> SimResult<Self> {
        let config: ExpeditionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &str) -> SimResult<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| SimError::Config(format!("cannot read {path}: {e}")))?;
        Self::from_json(&json)
    }

    fn validate(&self) -> SimResult<()> {
        if self.route.is_empty() {
            return Err(SimError::Config("route must contain at least one point".into()));
        }
        if self.history_capacity == 0 {
            return Err(SimError::Config("history_capacity must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for ExpeditionConfig {
    /// The Zambezi source expedition: eight route waypoints from the
    /// source wetlands down to the confluence reach, plus the three
    /// monitored threat sites along the corridor.
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            step_delta: DEFAULT_STEP_DELTA,
            history_capacity: HISTORY_CAPACITY,
            route: vec![
                GeoPoint::new(-12.312, 22.244),
                GeoPoint::new(-12.221, 22.369),
                GeoPoint::new(-12.115, 22.51),
                GeoPoint::new(-12.048, 22.712),
                GeoPoint::new(-12.034, 22.932),
                GeoPoint::new(-12.102, 23.121),
                GeoPoint::new(-12.218, 23.312),
                GeoPoint::new(-12.401, 23.501),
            ],
            threats: vec![
                ThreatMarker {
                    position: GeoPoint::new(-12.29, 22.36),
                    label: "Deforestation hotspot – woodland loss since 2010".into(),
                    category: ThreatCategory::Deforestation,
                },
                ThreatMarker {
                    position: GeoPoint::new(-12.18, 22.65),
                    label: "Fire cluster – increased burn frequency".into(),
                    category: ThreatCategory::Fire,
                },
                ThreatMarker {
                    position: GeoPoint::new(-12.05, 22.91),
                    label: "Logging area – road expansion risk".into(),
                    category: ThreatCategory::Logging,
                },
            ],
        }
    }
}
