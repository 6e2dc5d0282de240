//! Per-artist metrics: uniqueness-aware distributions, rankings, scatter

use crate::result::{GroupedCountResult, HistogramResult, ScatterResult, TopArtistsResult};
use muse_domain::{ArtworkRecord, Gender};
use muse_stats::{
    artist_identity, scatter_subset, top_k, ArtistAggregator, BinSet, UniqueCounter, YearRange,
};
use tracing::debug;

/// Distinct artists per nationality, top `top_n` by total.
///
/// Counts artists, not artworks: two works by the same artist add one.
/// Records with an unresolved creator are excluded entirely.
pub fn artists_by_nationality(records: &[ArtworkRecord], top_n: usize) -> GroupedCountResult {
    debug!(records = records.len(), top_n, "counting artists by nationality");

    let mut counter = UniqueCounter::new();
    for record in records {
        let Some(identity) = artist_identity(record) else {
            continue;
        };
        if let Some(nationality) = record.nationality.as_deref() {
            counter.add(nationality, record.gender, &identity);
        }
    }

    let totals = counter.totals();
    GroupedCountResult::from_groups(counter.into_top(top_n), totals)
}

/// Distinct artists per birth decade.
///
/// The decade axis is derived from the birth years of resolved creators
/// within the plausibility domain; intermediate empty decades stay on the
/// axis.
pub fn artists_by_birth_decade(records: &[ArtworkRecord], domain: YearRange) -> HistogramResult {
    debug!(records = records.len(), "counting artists by birth decade");

    let years: Vec<i32> = records
        .iter()
        .filter(|record| record.known_creator().is_some())
        .filter_map(|record| record.birth_year)
        .collect();
    let bins = BinSet::decades(&years, domain);

    let mut counter = UniqueCounter::new();
    for bin in &bins.bins {
        counter.ensure(&bin.label);
    }
    for record in records {
        let Some(identity) = artist_identity(record) else {
            continue;
        };
        let Some(year) = record.birth_year else {
            continue;
        };
        if let Some(idx) = bins.index_of(year as f64) {
            counter.add(&bins.bins[idx].label, record.gender, &identity);
        }
    }

    let tallies = counter
        .into_ordered()
        .into_iter()
        .map(|(_, counts)| counts)
        .collect();
    HistogramResult::from_tallies(bins, tallies)
}

/// Top `k` artists by artwork count, per gender
pub fn top_artists(records: &[ArtworkRecord], k: usize) -> TopArtistsResult {
    debug!(records = records.len(), k, "ranking artists");

    let ranked = ArtistAggregator::from_records(records).into_ranked();
    TopArtistsResult {
        male: top_k(&ranked, Gender::Male, k),
        female: top_k(&ranked, Gender::Female, k),
        unknown: top_k(&ranked, Gender::Unknown, k),
    }
}

/// Scatter points of birth year against artwork count.
///
/// Only artists with a birth year inside the domain and at least two
/// artworks are included.
pub fn artist_scatter(records: &[ArtworkRecord], domain: YearRange) -> ScatterResult {
    debug!(records = records.len(), "building artist scatter");

    let ranked = ArtistAggregator::from_records(records).into_ranked();
    ScatterResult {
        points: scatter_subset(&ranked, domain),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use muse_domain::UNKNOWN_CREATOR;

    fn artist_record(name: &str, gender: Gender) -> ArtworkRecord {
        ArtworkRecord::new(gender).with_creator(name)
    }

    #[test]
    fn test_artists_by_nationality_dedups() {
        let records = vec![
            artist_record("Anna Ancher", Gender::Female)
                .with_birth_year(1859)
                .with_nationality("Danish"),
            artist_record("Anna Ancher", Gender::Female)
                .with_birth_year(1859)
                .with_nationality("Danish"),
            artist_record("Michael Ancher", Gender::Male)
                .with_birth_year(1849)
                .with_nationality("Danish"),
            artist_record(UNKNOWN_CREATOR, Gender::Unknown).with_nationality("Danish"),
        ];
        let result = artists_by_nationality(&records, 10);

        assert_eq!(result.labels, vec!["Danish"]);
        assert_eq!(result.counts.female, vec![1]);
        assert_eq!(result.counts.male, vec![1]);
        // The unknown-creator record contributes nothing
        assert_eq!(result.counts.unknown, vec![0]);
    }

    #[test]
    fn test_artists_by_birth_decade_keeps_empty_decades() {
        let records = vec![
            artist_record("A", Gender::Male).with_birth_year(1600),
            artist_record("A", Gender::Male).with_birth_year(1600),
            artist_record("B", Gender::Female).with_birth_year(1625),
        ];
        let result = artists_by_birth_decade(&records, YearRange::default());

        assert_eq!(result.labels, vec!["1600s", "1610s", "1620s"]);
        // Two records, one distinct artist
        assert_eq!(result.counts.male, vec![1, 0, 0]);
        assert_eq!(result.counts.female, vec![0, 0, 1]);
    }

    #[test]
    fn test_artists_by_birth_decade_empty() {
        let result = artists_by_birth_decade(&[], YearRange::default());
        assert!(result.labels.is_empty());
        assert_eq!(result.totals.total(), 0);
    }

    #[test]
    fn test_top_artists_split_by_gender() {
        let records = vec![
            artist_record("A", Gender::Female),
            artist_record("A", Gender::Female),
            artist_record("B", Gender::Female),
            artist_record("C", Gender::Male),
        ];
        let result = top_artists(&records, 1);

        assert_eq!(result.female.len(), 1);
        assert_eq!(result.female[0].name, "A");
        assert_eq!(result.male[0].name, "C");
        assert!(result.unknown.is_empty());
    }

    #[test]
    fn test_artist_scatter_policy() {
        let records = vec![
            artist_record("A", Gender::Female).with_birth_year(1859),
            artist_record("A", Gender::Female).with_birth_year(1859),
            artist_record("B", Gender::Male).with_birth_year(1850),
        ];
        let result = artist_scatter(&records, YearRange::default());

        // B has only one artwork and is filtered out
        assert_eq!(result.points.len(), 1);
        assert_eq!(result.points[0].name, "A");
        assert_eq!(result.points[0].artworks, 2);
    }
}
