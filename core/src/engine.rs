//! The expedition engine — turns elapsed ticks into a route position
//! and a coherent set of synthetic sensor readings.
//!
//! TICK ORDER (fixed, documented, never reordered):
//!   1. Clock advances tick and progress (sole progress mutation).
//!   2. Geo resolves progress → target distance → position.
//!   3. Signals derive metrics from tick and position.
//!   4. Telemetry history appends one bounded sample.
//!   5. The full snapshot is assembled and published at once.
//!
//! RULES:
//!   - All randomness flows through the RngBank.
//!   - Consumers only ever see whole snapshots; there is no partial
//!     state to observe between steps.
//!   - The engine is single-threaded by construction. A concurrent
//!     driver must wrap it in a lock so each tick stays atomic.

use crate::{
    clock::ProgressClock,
    config::ExpeditionConfig,
    error::SimResult,
    geo::{self, GeoPoint},
    rng::{RngBank, SignalChannel},
    signals,
    snapshot::ExpeditionSnapshot,
    telemetry::{TelemetryHistory, TelemetrySample},
};
use chrono::Utc;

pub struct ExpeditionEngine {
    pub clock: ProgressClock,
    rng_bank: RngBank,
    config: ExpeditionConfig,
    cumulative: Vec<f64>,
    total_km: f64,
    threat_positions: Vec<GeoPoint>,
    history: TelemetryHistory,
    latest: Option<ExpeditionSnapshot>,
}

impl ExpeditionEngine {
    pub fn new(config: ExpeditionConfig, seed: u64) -> Self {
        let cumulative = geo::cumulative_distances(&config.route);
        let total_km = *cumulative.last().unwrap_or(&0.0);
        let threat_positions = config.threats.iter().map(|t| t.position).collect();
        Self {
            clock: ProgressClock::new(config.step_delta),
            rng_bank: RngBank::new(seed),
            history: TelemetryHistory::new(config.history_capacity),
            cumulative,
            total_km,
            threat_positions,
            config,
            latest: None,
        }
    }

    /// Advance one tick and publish the resulting snapshot.
    pub fn tick(&mut self) -> SimResult<ExpeditionSnapshot> {
        let tick = self.clock.advance();

        let target_km = self.total_km * self.clock.progress;
        let position = geo::interpolate_position(&self.config.route, &self.cumulative, target_km);

        let mut hr_rng = self.rng_bank.for_channel(SignalChannel::HeartRate, tick);
        let mut ph_rng = self.rng_bank.for_channel(SignalChannel::Ph, tick);
        let mut turbidity_rng = self.rng_bank.for_channel(SignalChannel::Turbidity, tick);
        let mut temp_rng = self.rng_bank.for_channel(SignalChannel::WaterTemp, tick);

        let heart_rate = signals::heart_rate(tick, &mut hr_rng);
        let ph = signals::ph(tick, &mut ph_rng);
        let turbidity = signals::turbidity(tick, &mut turbidity_rng);
        let water_temp = signals::water_temp(tick, &mut temp_rng);
        let nearest_threat_km = signals::nearest_threat_km(position, &self.threat_positions);

        self.history.push(TelemetrySample {
            tick,
            heart_rate,
            ph,
        });

        let snapshot = ExpeditionSnapshot {
            tick,
            position,
            distance_km: signals::display_distance_km(self.total_km, self.clock.progress),
            heart_rate,
            ph,
            turbidity,
            water_temp,
            nearest_threat_km,
            last_updated: Utc::now(),
            history: self.history.to_vec(),
        };

        log::debug!(
            "tick={tick} pos=({:.4},{:.4}) dist={:.1}km hr={heart_rate} ph={ph}",
            snapshot.position.lat,
            snapshot.position.lng,
            snapshot.distance_km,
        );

        self.latest = Some(snapshot.clone());
        Ok(snapshot)
    }

    /// Run n ticks in a loop. Used for testing and fast-forward.
    pub fn run_ticks(&mut self, n: u64) -> SimResult<()> {
        for _ in 0..n {
            self.tick()?;
        }
        Ok(())
    }

    /// The most recently published snapshot, for consumers arriving
    /// between ticks. None before the first tick.
    pub fn latest(&self) -> Option<&ExpeditionSnapshot> {
        self.latest.as_ref()
    }

    /// Where the expedition is right now. Before the first tick this
    /// is the route start — a log created immediately pins there.
    pub fn current_position(&self) -> GeoPoint {
        self.latest
            .as_ref()
            .map(|s| s.position)
            .unwrap_or(self.config.route[0])
    }

    /// Full path length of the configured route in kilometers.
    pub fn total_route_km(&self) -> f64 {
        self.total_km
    }

    pub fn config(&self) -> &ExpeditionConfig {
        &self.config
    }
}
