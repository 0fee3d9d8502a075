//! Shared primitive types used across the entire engine.

/// A simulation tick. One tick = one update interval of the expedition.
pub type Tick = u64;

/// A stable, unique identifier for any entity in the engine.
pub type EntityId = String;
