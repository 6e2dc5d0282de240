//! Output shapes shared by all metrics
//!
//! Every metric returns a self-describing plain-data structure: an ordered
//! label sequence, parallel per-gender numeric arrays, and the raw counts
//! alongside derived percentages so consumers can cross-validate. All
//! types serialize directly for the rendering layer.

use muse_stats::{percent, ArtistStats, Bin, BinSet, DistanceSummary, GenderCounts};
use serde::{Deserialize, Serialize};

/// Parallel per-gender vectors, one entry per label of the owning result
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenderSeries<T> {
    pub male: Vec<T>,
    pub female: Vec<T>,
    pub unknown: Vec<T>,
}

impl<T> GenderSeries<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            male: Vec::with_capacity(capacity),
            female: Vec::with_capacity(capacity),
            unknown: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, male: T, female: T, unknown: T) {
        self.male.push(male);
        self.female.push(female);
        self.unknown.push(unknown);
    }

    pub fn len(&self) -> usize {
        self.male.len()
    }

    pub fn is_empty(&self) -> bool {
        self.male.is_empty()
    }
}

impl<T> Default for GenderSeries<T> {
    fn default() -> Self {
        Self {
            male: Vec::new(),
            female: Vec::new(),
            unknown: Vec::new(),
        }
    }
}

/// One scalar per gender category (a rate, mean, or median)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GenderValues {
    pub male: f64,
    pub female: f64,
    pub unknown: f64,
}

impl GenderValues {
    /// Zero-safe percentages of `counts` against per-gender denominators
    pub fn rates(counts: GenderCounts, totals: GenderCounts) -> Self {
        Self {
            male: percent(counts.male, totals.male),
            female: percent(counts.female, totals.female),
            unknown: percent(counts.unknown, totals.unknown),
        }
    }
}

/// Grouped counts per category value, ordered as produced by the metric
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GroupedCountResult {
    pub labels: Vec<String>,
    pub counts: GenderSeries<u64>,
    pub percentages: GenderSeries<f64>,
    /// Per-gender denominators used for the percentages; for truncated
    /// results these cover all groups, not only the retained ones
    pub totals: GenderCounts,
}

impl GroupedCountResult {
    /// Assemble from (label, counts) groups against explicit denominators
    pub fn from_groups(groups: Vec<(String, GenderCounts)>, totals: GenderCounts) -> Self {
        let mut labels = Vec::with_capacity(groups.len());
        let mut counts = GenderSeries::with_capacity(groups.len());
        let mut percentages = GenderSeries::with_capacity(groups.len());

        for (label, group) in groups {
            labels.push(label);
            counts.push(group.male, group.female, group.unknown);
            percentages.push(
                percent(group.male, totals.male),
                percent(group.female, totals.female),
                percent(group.unknown, totals.unknown),
            );
        }

        Self {
            labels,
            counts,
            percentages,
            totals,
        }
    }
}

/// Binned counts with the bin definitions retained for axis rendering
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HistogramResult {
    pub bins: Vec<Bin>,
    pub labels: Vec<String>,
    pub counts: GenderSeries<u64>,
    pub percentages: GenderSeries<f64>,
    /// Per-gender bin totals, the percentage denominators
    pub totals: GenderCounts,
}

impl HistogramResult {
    /// Assemble from a bin set and its parallel per-bin tallies
    pub fn from_tallies(bins: BinSet, tallies: Vec<GenderCounts>) -> Self {
        let mut totals = GenderCounts::default();
        for tally in &tallies {
            totals.male += tally.male;
            totals.female += tally.female;
            totals.unknown += tally.unknown;
        }

        let labels = bins.labels();
        let mut counts = GenderSeries::with_capacity(tallies.len());
        let mut percentages = GenderSeries::with_capacity(tallies.len());
        for tally in tallies {
            counts.push(tally.male, tally.female, tally.unknown);
            percentages.push(
                percent(tally.male, totals.male),
                percent(tally.female, totals.female),
                percent(tally.unknown, totals.unknown),
            );
        }

        Self {
            bins: bins.bins,
            labels,
            counts,
            percentages,
            totals,
        }
    }
}

/// A yes/no attribute share per gender (on display, has image)
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct ShareResult {
    /// Records with the attribute set, per gender
    pub counts: GenderCounts,
    /// All records, per gender
    pub totals: GenderCounts,
    pub percentages: GenderValues,
}

/// Distance statistics per gender with the observation weights behind them
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct DistanceResult {
    pub male: DistanceSummary,
    pub female: DistanceSummary,
    pub unknown: DistanceSummary,
    /// Weighted observation totals per gender
    pub observations: GenderCounts,
}

/// Top-ranked artists per gender
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TopArtistsResult {
    pub male: Vec<ArtistStats>,
    pub female: Vec<ArtistStats>,
    pub unknown: Vec<ArtistStats>,
}

/// Artist scatter points (birth year vs. artwork count)
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ScatterResult {
    pub points: Vec<ArtistStats>,
}

/// Overall record split by creator gender
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct GenderBreakdownResult {
    pub counts: GenderCounts,
    /// Share of all records, per gender
    pub percentages: GenderValues,
}

/// Exhibition-count distribution with central tendencies
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ExhibitionResult {
    pub histogram: HistogramResult,
    pub mean: GenderValues,
    pub median: GenderValues,
}

/// Artwork size distribution with central tendencies in square meters
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ArtworkSizeResult {
    pub histogram: HistogramResult,
    pub mean_m2: GenderValues,
    pub median_m2: GenderValues,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouped_result_percentages() {
        let groups = vec![
            (
                "painting".to_string(),
                GenderCounts {
                    male: 3,
                    female: 1,
                    unknown: 0,
                },
            ),
            (
                "print".to_string(),
                GenderCounts {
                    male: 1,
                    female: 0,
                    unknown: 0,
                },
            ),
        ];
        let totals = GenderCounts {
            male: 4,
            female: 1,
            unknown: 0,
        };
        let result = GroupedCountResult::from_groups(groups, totals);

        assert_eq!(result.labels, vec!["painting", "print"]);
        assert_eq!(result.counts.male, vec![3, 1]);
        assert_eq!(result.percentages.male, vec![75.0, 25.0]);
        assert_eq!(result.percentages.female, vec![100.0, 0.0]);
        // Zero denominator stays zero, never NaN
        assert_eq!(result.percentages.unknown, vec![0.0, 0.0]);
    }

    #[test]
    fn test_histogram_result_totals() {
        let bins = BinSet::new(vec![
            Bin::bounded(0.0, 10.0, "low"),
            Bin::open_ended(10.0, "high"),
        ]);
        let tallies = vec![
            GenderCounts {
                male: 2,
                female: 0,
                unknown: 0,
            },
            GenderCounts {
                male: 2,
                female: 1,
                unknown: 0,
            },
        ];
        let result = HistogramResult::from_tallies(bins, tallies);

        assert_eq!(result.totals.male, 4);
        assert_eq!(result.percentages.male, vec![50.0, 50.0]);
        assert_eq!(result.percentages.female, vec![0.0, 100.0]);
        assert_eq!(result.bins.len(), 2);
    }

    #[test]
    fn test_empty_shapes_serialize() {
        let result = GroupedCountResult::default();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"labels\":[]"));
    }
}
