//! Geographic spread metrics

use crate::result::DistanceResult;
use muse_domain::{ArtworkRecord, Gender};
use muse_stats::{haversine_km, DistanceSummary, GenderCounts};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Reference point distances are measured from
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Origin {
    pub latitude: f64,
    pub longitude: f64,
}

impl Origin {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Default for Origin {
    /// Copenhagen city center, where the collection is housed
    fn default() -> Self {
        Self {
            latitude: 55.6761,
            longitude: 12.5683,
        }
    }
}

/// Distance statistics from the origin to each referenced location, per
/// creator gender.
///
/// Distances are computed once per distinct location name and weighted by
/// how many times that location is referenced, so a frequently depicted
/// place pulls the median accordingly. Records without locations are
/// excluded from this metric only.
pub fn geographic_spread(records: &[ArtworkRecord], origin: Origin) -> DistanceResult {
    debug!(records = records.len(), "computing geographic spread");

    // location name -> (distance_km, occurrence count), per gender
    let mut weighted: [HashMap<String, (f64, u64)>; 3] = Default::default();
    for record in records {
        let slot = match record.gender {
            Gender::Male => 0,
            Gender::Female => 1,
            Gender::Unknown => 2,
        };
        for location in &record.geo_locations {
            let entry = weighted[slot]
                .entry(location.name.clone())
                .or_insert_with(|| {
                    let km = haversine_km(
                        origin.latitude,
                        origin.longitude,
                        location.latitude,
                        location.longitude,
                    );
                    (km, 0)
                });
            entry.1 += 1;
        }
    }

    let summarize = |map: &HashMap<String, (f64, u64)>| -> (DistanceSummary, u64) {
        let pairs: Vec<(f64, u64)> = map.values().copied().collect();
        let total: u64 = pairs.iter().map(|(_, w)| w).sum();
        (DistanceSummary::from_weighted(&pairs), total)
    };

    let (male, male_n) = summarize(&weighted[0]);
    let (female, female_n) = summarize(&weighted[1]);
    let (unknown, unknown_n) = summarize(&weighted[2]);

    DistanceResult {
        male,
        female,
        unknown,
        observations: GenderCounts {
            male: male_n,
            female: female_n,
            unknown: unknown_n,
        },
    }
}
