//! Year- and count-based distribution metrics

use crate::result::{ExhibitionResult, GenderValues, HistogramResult};
use muse_domain::{ArtworkRecord, Gender};
use muse_stats::{mean, median, Bin, BinSet, YearRange};
use tracing::debug;

/// Artwork counts per production decade within the plausibility domain
pub fn production_by_decade(records: &[ArtworkRecord], domain: YearRange) -> HistogramResult {
    debug!(records = records.len(), "computing production decades");
    decade_histogram(records, domain, |record| record.production_year)
}

/// Artwork counts per acquisition decade within the plausibility domain
pub fn acquisition_by_decade(records: &[ArtworkRecord], domain: YearRange) -> HistogramResult {
    debug!(records = records.len(), "computing acquisition decades");
    decade_histogram(records, domain, |record| record.acquisition_year)
}

fn decade_histogram<F>(
    records: &[ArtworkRecord],
    domain: YearRange,
    year_of: F,
) -> HistogramResult
where
    F: Fn(&ArtworkRecord) -> Option<i32>,
{
    let years: Vec<i32> = records.iter().filter_map(&year_of).collect();
    let bins = BinSet::decades(&years, domain);
    let tallies = bins.tally(
        records
            .iter()
            .filter_map(|record| year_of(record).map(|year| (year as f64, record.gender))),
    );
    HistogramResult::from_tallies(bins, tallies)
}

/// Creator age at production, in fixed ten-year bands.
///
/// A record needs both a birth year and a production year inside the
/// plausibility domain; negative ages fall outside every bin and drop out.
pub fn age_at_production(records: &[ArtworkRecord], domain: YearRange) -> HistogramResult {
    debug!(records = records.len(), "computing ages at production");

    let bins = BinSet::new(vec![
        Bin::bounded(0.0, 20.0, "Under 20"),
        Bin::bounded(20.0, 30.0, "20-29"),
        Bin::bounded(30.0, 40.0, "30-39"),
        Bin::bounded(40.0, 50.0, "40-49"),
        Bin::bounded(50.0, 60.0, "50-59"),
        Bin::bounded(60.0, 70.0, "60-69"),
        Bin::open_ended(70.0, "70+"),
    ]);

    let ages = records.iter().filter_map(|record| {
        let birth = record.birth_year.filter(|year| domain.contains(*year))?;
        let production = record
            .production_year
            .filter(|year| domain.contains(*year))?;
        Some(((production - birth) as f64, record.gender))
    });
    let tallies = bins.tally(ages);
    HistogramResult::from_tallies(bins, tallies)
}

/// Exhibition counts in fixed bands, with per-gender mean and median
pub fn exhibition_distribution(records: &[ArtworkRecord]) -> ExhibitionResult {
    debug!(records = records.len(), "computing exhibition distribution");

    let bins = BinSet::new(vec![
        Bin::bounded(0.0, 1.0, "0"),
        Bin::bounded(1.0, 3.0, "1-2"),
        Bin::bounded(3.0, 6.0, "3-5"),
        Bin::bounded(6.0, 11.0, "6-10"),
        Bin::open_ended(11.0, "11+"),
    ]);
    let tallies = bins.tally(
        records
            .iter()
            .map(|record| (record.exhibitions as f64, record.gender)),
    );
    let histogram = HistogramResult::from_tallies(bins, tallies);

    let per_gender = |gender: Gender| -> Vec<f64> {
        records
            .iter()
            .filter(|record| record.gender == gender)
            .map(|record| record.exhibitions as f64)
            .collect()
    };
    let male = per_gender(Gender::Male);
    let female = per_gender(Gender::Female);
    let unknown = per_gender(Gender::Unknown);

    ExhibitionResult {
        histogram,
        mean: GenderValues {
            male: mean(&male),
            female: mean(&female),
            unknown: mean(&unknown),
        },
        median: GenderValues {
            male: median(&male),
            female: median(&female),
            unknown: median(&unknown),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(gender: Gender) -> ArtworkRecord {
        ArtworkRecord::new(gender)
    }

    #[test]
    fn test_production_decades_span_range() {
        let records = vec![
            record(Gender::Male).with_production_year(1600),
            record(Gender::Female).with_production_year(1614),
            record(Gender::Male).with_production_year(1699),
            record(Gender::Male), // no year, excluded from this metric
        ];
        let result = production_by_decade(&records, YearRange::default());

        assert_eq!(result.labels.len(), 10);
        assert_eq!(result.labels[0], "1600s");
        assert_eq!(result.labels[2], "1620s");
        assert_eq!(result.counts.male, vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(result.counts.female[1], 1);
        assert_eq!(result.totals.total(), 3);
    }

    #[test]
    fn test_production_decades_empty_input() {
        let result = production_by_decade(&[], YearRange::default());
        assert!(result.labels.is_empty());
        assert_eq!(result.totals.total(), 0);
    }

    #[test]
    fn test_age_at_production_requires_both_years() {
        let records = vec![
            record(Gender::Female)
                .with_birth_year(1859)
                .with_production_year(1885),
            record(Gender::Female).with_birth_year(1859),
            record(Gender::Female).with_production_year(1885),
        ];
        let result = age_at_production(&records, YearRange::default());

        // Age 26 lands in the 20-29 band; the incomplete records drop out
        assert_eq!(result.totals.female, 1);
        assert_eq!(result.counts.female[1], 1);
    }

    #[test]
    fn test_age_at_production_drops_negative_ages() {
        let records = vec![record(Gender::Male)
            .with_birth_year(1900)
            .with_production_year(1850)];
        let result = age_at_production(&records, YearRange::default());
        assert_eq!(result.totals.total(), 0);
    }

    #[test]
    fn test_exhibition_bands_and_stats() {
        let records = vec![
            record(Gender::Male).with_exhibitions(0),
            record(Gender::Male).with_exhibitions(2),
            record(Gender::Male).with_exhibitions(4),
            record(Gender::Female).with_exhibitions(12),
        ];
        let result = exhibition_distribution(&records);

        assert_eq!(result.histogram.counts.male, vec![1, 1, 1, 0, 0]);
        assert_eq!(result.histogram.counts.female, vec![0, 0, 0, 0, 1]);
        assert_eq!(result.mean.male, 2.0);
        assert_eq!(result.median.male, 2.0);
        assert_eq!(result.median.female, 12.0);
        assert_eq!(result.mean.unknown, 0.0);
    }
}
