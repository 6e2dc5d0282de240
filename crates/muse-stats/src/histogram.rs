//! Histogram binning for gendered distributions
//!
//! Two binning modes feed the timeline and size metrics:
//! - Fixed-edge bins: explicit ascending half-open intervals with an
//!   unbounded final bin
//! - Dynamic decade bins: 10-year-wide bins derived from the data after
//!   filtering to a plausibility domain
//!
//! Assignment is first-match-wins over non-overlapping bins; a value that
//! matches no bin is silently dropped rather than treated as an error.

use crate::aggregate::GenderCounts;
use muse_domain::Gender;
use serde::{Deserialize, Serialize};

/// Inclusive year range used to filter implausible source years before
/// dynamic binning.
///
/// Catalogued records occasionally carry placeholder years (0, 9999) that
/// would otherwise stretch a decade axis across millennia.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl YearRange {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, year: i32) -> bool {
        year >= self.min && year <= self.max
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            min: 1400,
            max: 2025,
        }
    }
}

/// A single histogram bin: half-open `[min, max)`, or unbounded above when
/// `max` is `None`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    pub min: f64,
    pub max: Option<f64>,
    pub label: String,
}

impl Bin {
    pub fn bounded(min: f64, max: f64, label: impl Into<String>) -> Self {
        Self {
            min,
            max: Some(max),
            label: label.into(),
        }
    }

    pub fn open_ended(min: f64, label: impl Into<String>) -> Self {
        Self {
            min,
            max: None,
            label: label.into(),
        }
    }

    /// Boundary values belong to the upper bin: `min` is inclusive,
    /// `max` exclusive.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && self.max.map_or(true, |max| value < max)
    }
}

/// An ordered set of non-overlapping bins
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BinSet {
    pub bins: Vec<Bin>,
}

impl BinSet {
    pub fn new(bins: Vec<Bin>) -> Self {
        Self { bins }
    }

    /// Build consecutive decade bins covering the given years.
    ///
    /// Years outside `domain` are ignored. The bins run from the decade of
    /// the smallest surviving year through the decade of the largest, with
    /// every intermediate decade present even when no year falls in it.
    /// Labels are the decade start ("1620s"). An empty survivor set yields
    /// an empty bin set.
    pub fn decades(years: &[i32], domain: YearRange) -> Self {
        let mut lo = i32::MAX;
        let mut hi = i32::MIN;
        let mut any = false;
        for &year in years {
            if domain.contains(year) {
                any = true;
                lo = lo.min(year);
                hi = hi.max(year);
            }
        }
        if !any {
            return Self::default();
        }

        let first = lo.div_euclid(10) * 10;
        let last = hi.div_euclid(10) * 10;
        let bins = (first..=last)
            .step_by(10)
            .map(|decade| {
                Bin::bounded(decade as f64, (decade + 10) as f64, format!("{}s", decade))
            })
            .collect();
        Self { bins }
    }

    /// Index of the first bin containing the value, if any
    pub fn index_of(&self, value: f64) -> Option<usize> {
        self.bins.iter().position(|bin| bin.contains(value))
    }

    pub fn labels(&self) -> Vec<String> {
        self.bins.iter().map(|bin| bin.label.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Tally gendered observations into per-bin counts.
    ///
    /// Observations outside every bin are dropped; the returned vector is
    /// parallel to `self.bins`.
    pub fn tally<I>(&self, observations: I) -> Vec<GenderCounts>
    where
        I: IntoIterator<Item = (f64, Gender)>,
    {
        let mut counts = vec![GenderCounts::default(); self.bins.len()];
        for (value, gender) in observations {
            if let Some(idx) = self.index_of(value) {
                counts[idx].add(gender);
            }
        }
        counts
    }
}
