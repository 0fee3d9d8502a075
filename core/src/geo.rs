//! Great-circle geometry for route progression.
//!
//! RULE: Everything in this module is a pure function.
//! No state, no randomness, no I/O — callers own all of that.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers, as used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Floor applied to segment lengths during interpolation so that
/// coincident consecutive route points never divide by zero.
pub const MIN_SEGMENT_KM: f64 = 0.0001;

/// A geographic coordinate in degrees. Pure value type — two points
/// with the same coordinates are the same point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

fn to_rad(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Great-circle distance between two points in kilometers (haversine).
///
/// Symmetric in its arguments; `haversine_km(a, a)` is zero up to
/// floating-point epsilon.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = to_rad(b.lat - a.lat);
    let d_lng = to_rad(b.lng - a.lng);
    let lat1 = to_rad(a.lat);
    let lat2 = to_rad(b.lat);

    let sin_lat = (d_lat / 2.0).sin();
    let sin_lng = (d_lng / 2.0).sin();
    let h = sin_lat * sin_lat + lat1.cos() * lat2.cos() * sin_lng * sin_lng;
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Prefix sums of the pairwise haversine distances along a route.
///
/// Entry `i` is the path length from `route[0]` through `route[i]`.
/// Entry 0 is always 0; the sequence is monotonically non-decreasing
/// and has the same length as the route. A single-point route yields
/// `[0.0]`.
pub fn cumulative_distances(route: &[GeoPoint]) -> Vec<f64> {
    let mut distances = Vec::with_capacity(route.len());
    distances.push(0.0);
    for window in route.windows(2) {
        let last = *distances.last().unwrap_or(&0.0);
        distances.push(last + haversine_km(window[0], window[1]));
    }
    distances
}

/// Piecewise-linear position at `target_km` along the route.
///
/// Segment selection takes the earliest segment whose cumulative end
/// reaches the target (first match wins, including across zero-length
/// segments from duplicate route points). The in-segment fraction is
/// clamped to [0, 1] so floating-point drift never extrapolates past a
/// segment's endpoints. A target beyond the table saturates to the
/// final segment.
///
/// Routes with fewer than two points return the sole point unchanged.
pub fn interpolate_position(route: &[GeoPoint], cumulative: &[f64], target_km: f64) -> GeoPoint {
    if route.len() < 2 {
        return route[0];
    }

    let mut segment = route.len() - 2;
    for i in 1..cumulative.len() {
        if target_km <= cumulative[i] {
            segment = i - 1;
            break;
        }
    }

    let start = route[segment];
    let end = route[segment + 1];
    let segment_start = cumulative[segment];
    let segment_end = cumulative[segment + 1];
    let segment_len = (segment_end - segment_start).max(MIN_SEGMENT_KM);
    let t = ((target_km - segment_start) / segment_len).clamp(0.0, 1.0);

    GeoPoint {
        lat: start.lat + (end.lat - start.lat) * t,
        lng: start.lng + (end.lng - start.lng) * t,
    }
}

/// Minimum great-circle distance from `point` to any of `markers`,
/// in kilometers. An empty marker set is defined as distance 0.
pub fn nearest_distance_km(point: GeoPoint, markers: &[GeoPoint]) -> f64 {
    markers
        .iter()
        .map(|m| haversine_km(point, *m))
        .fold(None, |best: Option<f64>, d| match best {
            Some(b) if b <= d => Some(b),
            _ => Some(d),
        })
        .unwrap_or(0.0)
}
