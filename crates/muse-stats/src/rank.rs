//! Per-artist aggregation and top-N selection
//!
//! Artists are grouped by creator name with the "Unknown" sentinel
//! excluded. Metadata (gender, birth year, nationality) is captured from
//! the first record seen for a name and never overwritten, even when later
//! records disagree; the counts stay attributable to what the source
//! published first.

use crate::histogram::YearRange;
use muse_domain::{ArtworkRecord, Gender};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Aggregated statistics for a single artist
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArtistStats {
    pub name: String,
    pub gender: Gender,
    pub birth_year: Option<i32>,
    pub nationality: Option<String>,
    pub artworks: u64,
}

/// Composite dedup key for distinct-artist counting.
///
/// Two records with the same name but different birth years denote two
/// logical artists. `None` for absent or unresolved creator names.
pub fn artist_identity(record: &ArtworkRecord) -> Option<String> {
    let name = record.known_creator()?;
    match record.birth_year {
        Some(year) => Some(format!("{}|{}", name, year)),
        None => Some(format!("{}|", name)),
    }
}

/// Accumulates per-artist artwork counts across a record sequence
#[derive(Clone, Debug, Default)]
pub struct ArtistAggregator {
    order: Vec<String>,
    artists: HashMap<String, ArtistStats>,
}

impl ArtistAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: &[ArtworkRecord]) -> Self {
        let mut aggregator = Self::new();
        for record in records {
            aggregator.add(record);
        }
        aggregator
    }

    /// Fold one record in; records without a resolved creator are skipped
    pub fn add(&mut self, record: &ArtworkRecord) {
        let Some(name) = record.known_creator() else {
            return;
        };

        if let Some(artist) = self.artists.get_mut(name) {
            artist.artworks += 1;
        } else {
            self.order.push(name.to_string());
            self.artists.insert(
                name.to_string(),
                ArtistStats {
                    name: name.to_string(),
                    gender: record.gender,
                    birth_year: record.birth_year,
                    nationality: record.nationality.clone(),
                    artworks: 1,
                },
            );
        }
    }

    /// Artists sorted by artwork count descending; ties keep first-seen order
    pub fn into_ranked(self) -> Vec<ArtistStats> {
        let Self { order, mut artists } = self;
        let mut ranked: Vec<ArtistStats> = order
            .into_iter()
            .filter_map(|name| artists.remove(&name))
            .collect();
        ranked.sort_by(|a, b| b.artworks.cmp(&a.artworks));
        ranked
    }
}

/// Artists of one gender, preserving rank order
pub fn filter_gender(ranked: &[ArtistStats], gender: Gender) -> Vec<ArtistStats> {
    ranked
        .iter()
        .filter(|artist| artist.gender == gender)
        .cloned()
        .collect()
}

/// Top `k` artists of one gender
pub fn top_k(ranked: &[ArtistStats], gender: Gender, k: usize) -> Vec<ArtistStats> {
    ranked
        .iter()
        .filter(|artist| artist.gender == gender)
        .take(k)
        .cloned()
        .collect()
}

/// Scatter subset: artists with a plausible birth year and at least two
/// artworks.
///
/// The two-artwork floor keeps one-off attributions from cluttering the
/// scatter view downstream.
pub fn scatter_subset(ranked: &[ArtistStats], domain: YearRange) -> Vec<ArtistStats> {
    ranked
        .iter()
        .filter(|artist| {
            artist.artworks >= 2
                && artist
                    .birth_year
                    .map_or(false, |year| domain.contains(year))
        })
        .cloned()
        .collect()
}
