//! Geodesic distance and weighted distance summaries
//!
//! Distances are great-circle kilometers on a fixed-radius sphere. The
//! summary statistics treat each (distance, occurrence count) pair as that
//! many repeated observations, so a location referenced by 40 artworks
//! pulls the median accordingly.

use crate::summary::{
    weighted_max, weighted_mean, weighted_median, weighted_min, weighted_percentile,
};
use serde::{Deserialize, Serialize};

/// Mean sphere radius used for all great-circle distances, in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance between two points, in kilometers.
///
/// Inputs are degrees. Half-angle/atan2 form.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Distance statistics over a weighted set of locations
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DistanceSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub avg: f64,
}

impl DistanceSummary {
    /// Summarize (distance_km, occurrence count) pairs.
    ///
    /// Returns the all-zero summary when the total weight is zero, so a
    /// gender with no located artworks still yields a valid shape.
    pub fn from_weighted(pairs: &[(f64, u64)]) -> Self {
        Self {
            min: weighted_min(pairs),
            q1: weighted_percentile(pairs, 0.25),
            median: weighted_median(pairs),
            q3: weighted_percentile(pairs, 0.75),
            max: weighted_max(pairs),
            avg: weighted_mean(pairs),
        }
    }
}
