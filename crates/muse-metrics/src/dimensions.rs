//! Artwork size metrics

use crate::result::{ArtworkSizeResult, GenderValues, HistogramResult};
use muse_domain::{ArtworkRecord, Gender};
use muse_stats::{mean, median, Bin, BinSet};
use tracing::debug;

/// Artwork areas in fixed size bands, with per-gender mean and median in
/// square meters.
///
/// Records without dimensions are excluded from this metric only.
pub fn artwork_size_distribution(records: &[ArtworkRecord]) -> ArtworkSizeResult {
    debug!(records = records.len(), "computing size distribution");

    let bins = BinSet::new(vec![
        Bin::bounded(0.0, 0.05, "<0.05 m²"),
        Bin::bounded(0.05, 0.25, "0.05-0.25 m²"),
        Bin::bounded(0.25, 1.0, "0.25-1 m²"),
        Bin::bounded(1.0, 5.0, "1-5 m²"),
        Bin::open_ended(5.0, "5+ m²"),
    ]);

    let tallies = bins.tally(records.iter().filter_map(|record| {
        record
            .dimensions
            .map(|dims| (dims.area_m2(), record.gender))
    }));
    let histogram = HistogramResult::from_tallies(bins, tallies);

    let per_gender = |gender: Gender| -> Vec<f64> {
        records
            .iter()
            .filter(|record| record.gender == gender)
            .filter_map(|record| record.dimensions.map(|dims| dims.area_m2()))
            .collect()
    };
    let male = per_gender(Gender::Male);
    let female = per_gender(Gender::Female);
    let unknown = per_gender(Gender::Unknown);

    ArtworkSizeResult {
        histogram,
        mean_m2: GenderValues {
            male: mean(&male),
            female: mean(&female),
            unknown: mean(&unknown),
        },
        median_m2: GenderValues {
            male: median(&male),
            female: median(&female),
            unknown: median(&unknown),
        },
    }
}
