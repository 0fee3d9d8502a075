//! expedition-core — route progression and synthetic telemetry for the
//! Zambezi source expedition dashboard.
//!
//! The engine turns elapsed ticks into a position along a fixed
//! geographic route, a cumulative distance, and a bounded window of
//! synthetic sensor samples. A small key-value persistence layer keeps
//! user-authored expedition log entries across sessions. Rendering is
//! someone else's job — this crate only publishes snapshots.

pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod geo;
pub mod logbook;
pub mod rng;
pub mod signals;
pub mod snapshot;
pub mod store;
pub mod telemetry;
pub mod types;
