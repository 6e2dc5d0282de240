//! Per-gender categorical and uniqueness-aware counting
//!
//! The counters accumulate into a map plus an explicit first-seen key
//! order, so read-time sorting is deterministic and ties break by the
//! order groups first appeared in the input.

use muse_domain::{ArtworkRecord, Gender, UNKNOWN_CREATOR};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Counts partitioned by the three gender categories
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderCounts {
    pub male: u64,
    pub female: u64,
    pub unknown: u64,
}

impl GenderCounts {
    pub fn add(&mut self, gender: Gender) {
        self.add_n(gender, 1);
    }

    pub fn add_n(&mut self, gender: Gender, n: u64) {
        match gender {
            Gender::Male => self.male += n,
            Gender::Female => self.female += n,
            Gender::Unknown => self.unknown += n,
        }
    }

    pub fn get(&self, gender: Gender) -> u64 {
        match gender {
            Gender::Male => self.male,
            Gender::Female => self.female,
            Gender::Unknown => self.unknown,
        }
    }

    pub fn total(&self) -> u64 {
        self.male + self.female + self.unknown
    }
}

/// Zero-safe percentage: `part / whole * 100`, or 0 when `whole` is 0
pub fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Occurrence counter keyed by category value.
///
/// Multi-valued attributes contribute one increment per element, so a
/// record may add to several groups.
#[derive(Clone, Debug, Default)]
pub struct CategoryCounter {
    order: Vec<String>,
    counts: HashMap<String, GenderCounts>,
}

impl CategoryCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a group so it appears in the output even with zero counts
    pub fn ensure(&mut self, key: &str) {
        if !self.counts.contains_key(key) {
            self.order.push(key.to_string());
            self.counts.insert(key.to_string(), GenderCounts::default());
        }
    }

    pub fn add(&mut self, key: &str, gender: Gender) {
        self.ensure(key);
        if let Some(counts) = self.counts.get_mut(key) {
            counts.add(gender);
        }
    }

    /// Per-gender totals across all groups
    pub fn totals(&self) -> GenderCounts {
        let mut totals = GenderCounts::default();
        for counts in self.counts.values() {
            totals.male += counts.male;
            totals.female += counts.female;
            totals.unknown += counts.unknown;
        }
        totals
    }

    /// Groups in first-seen input order
    pub fn into_ordered(self) -> Vec<(String, GenderCounts)> {
        let Self { order, mut counts } = self;
        order
            .into_iter()
            .map(|key| {
                let group = counts.remove(&key).unwrap_or_default();
                (key, group)
            })
            .collect()
    }

    /// Groups sorted by total count descending; ties keep first-seen order
    pub fn into_sorted(self) -> Vec<(String, GenderCounts)> {
        let mut groups = self.into_ordered();
        groups.sort_by(|a, b| b.1.total().cmp(&a.1.total()));
        groups
    }

    /// Sorted groups truncated to the top `n`
    pub fn into_top(self, n: usize) -> Vec<(String, GenderCounts)> {
        let mut groups = self.into_sorted();
        groups.truncate(n);
        groups
    }
}

/// Count records per (category value, gender) through an accessor.
///
/// The accessor may yield zero, one, or many values per record: return an
/// `Option<String>` for scalar attributes and a `Vec<String>` for
/// multi-valued ones.
pub fn count_by<F, I>(records: &[ArtworkRecord], accessor: F) -> CategoryCounter
where
    F: Fn(&ArtworkRecord) -> I,
    I: IntoIterator<Item = String>,
{
    let mut counter = CategoryCounter::new();
    for record in records {
        for value in accessor(record) {
            counter.add(&value, record.gender);
        }
    }
    counter
}

/// Distinct-entity counter keyed by category value.
///
/// Each group holds per-gender sets of identity keys; the output is set
/// cardinality rather than occurrence count. Identities equal to the
/// "Unknown" sentinel are excluded entirely.
#[derive(Clone, Debug, Default)]
pub struct UniqueCounter {
    order: Vec<String>,
    sets: HashMap<String, [HashSet<String>; 3]>,
}

impl UniqueCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a group so it appears in the output even when empty
    pub fn ensure(&mut self, key: &str) {
        if !self.sets.contains_key(key) {
            self.order.push(key.to_string());
            self.sets.insert(key.to_string(), Default::default());
        }
    }

    pub fn add(&mut self, key: &str, gender: Gender, identity: &str) {
        if identity == UNKNOWN_CREATOR {
            return;
        }
        self.ensure(key);
        if let Some(sets) = self.sets.get_mut(key) {
            let slot = match gender {
                Gender::Male => 0,
                Gender::Female => 1,
                Gender::Unknown => 2,
            };
            sets[slot].insert(identity.to_string());
        }
    }

    fn cardinality(sets: &[HashSet<String>; 3]) -> GenderCounts {
        GenderCounts {
            male: sets[0].len() as u64,
            female: sets[1].len() as u64,
            unknown: sets[2].len() as u64,
        }
    }

    /// Per-gender distinct totals across all groups.
    ///
    /// An entity appearing in several groups counts once per group, which
    /// is the denominator the per-group percentages need.
    pub fn totals(&self) -> GenderCounts {
        let mut totals = GenderCounts::default();
        for sets in self.sets.values() {
            let counts = Self::cardinality(sets);
            totals.male += counts.male;
            totals.female += counts.female;
            totals.unknown += counts.unknown;
        }
        totals
    }

    /// Groups in first-seen input order with distinct counts
    pub fn into_ordered(self) -> Vec<(String, GenderCounts)> {
        let Self { order, mut sets } = self;
        order
            .into_iter()
            .map(|key| {
                let counts = sets
                    .remove(&key)
                    .map(|group| Self::cardinality(&group))
                    .unwrap_or_default();
                (key, counts)
            })
            .collect()
    }

    /// Groups sorted by distinct total descending; ties keep first-seen order
    pub fn into_sorted(self) -> Vec<(String, GenderCounts)> {
        let mut groups = self.into_ordered();
        groups.sort_by(|a, b| b.1.total().cmp(&a.1.total()));
        groups
    }

    /// Sorted groups truncated to the top `n`
    pub fn into_top(self, n: usize) -> Vec<(String, GenderCounts)> {
        let mut groups = self.into_sorted();
        groups.truncate(n);
        groups
    }
}
