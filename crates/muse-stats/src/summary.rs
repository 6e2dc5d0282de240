//! Summary statistics over numeric sequences
//!
//! Provides the scalar reductions used by the metrics layer:
//! - Mean, median, min, max
//! - Nearest-rank percentiles (no interpolation)
//! - Weighted median/percentile equivalent to observation expansion
//!
//! All functions degrade to 0.0 on empty input; none of them panic or
//! produce NaN from a well-formed (finite) input sequence.

/// Arithmetic mean, 0.0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: f64 = values.iter().sum();
    sum / values.len() as f64
}

/// Median over a sorted copy, 0.0 for an empty slice.
///
/// Middle element for odd lengths, average of the two middle elements for
/// even lengths.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Nearest-rank percentile, 0.0 for an empty slice.
///
/// The rank is `floor(len * p)` into the sorted sequence, clamped to the
/// last element so `p = 1.0` stays in range. No interpolation.
pub fn percentile(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let idx = ((sorted.len() as f64) * p).floor() as usize;
    sorted[idx.min(sorted.len() - 1)]
}

/// Minimum via an iterative fold, 0.0 for an empty slice
pub fn min(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

/// Maximum via an iterative fold, 0.0 for an empty slice
pub fn max(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Weighted mean over (value, weight) pairs, 0.0 when total weight is 0
pub fn weighted_mean(pairs: &[(f64, u64)]) -> f64 {
    let total: u64 = pairs.iter().map(|(_, w)| w).sum();
    if total == 0 {
        return 0.0;
    }
    let sum: f64 = pairs.iter().map(|(v, w)| v * *w as f64).sum();
    sum / total as f64
}

/// Weighted median over (value, weight) pairs.
///
/// Produces the same result as expanding each pair into `weight` repeated
/// observations and taking [`median`] of the expansion: for an even total
/// weight the two middle expanded observations are averaged.
pub fn weighted_median(pairs: &[(f64, u64)]) -> f64 {
    let total: u64 = pairs.iter().map(|(_, w)| w).sum();
    if total == 0 {
        return 0.0;
    }
    let sorted = sorted_pairs(pairs);
    if total % 2 == 0 {
        let lower = value_at_rank(&sorted, total / 2 - 1);
        let upper = value_at_rank(&sorted, total / 2);
        (lower + upper) / 2.0
    } else {
        value_at_rank(&sorted, total / 2)
    }
}

/// Weighted nearest-rank percentile over (value, weight) pairs.
///
/// Equivalent to [`percentile`] of the expanded observation sequence.
pub fn weighted_percentile(pairs: &[(f64, u64)], p: f64) -> f64 {
    let total: u64 = pairs.iter().map(|(_, w)| w).sum();
    if total == 0 {
        return 0.0;
    }
    let sorted = sorted_pairs(pairs);
    let rank = ((total as f64) * p).floor() as u64;
    value_at_rank(&sorted, rank.min(total - 1))
}

/// Smallest value with nonzero weight, 0.0 when total weight is 0
pub fn weighted_min(pairs: &[(f64, u64)]) -> f64 {
    let result = pairs
        .iter()
        .filter(|(_, w)| *w > 0)
        .map(|(v, _)| *v)
        .fold(f64::INFINITY, f64::min);
    if result.is_finite() {
        result
    } else {
        0.0
    }
}

/// Largest value with nonzero weight, 0.0 when total weight is 0
pub fn weighted_max(pairs: &[(f64, u64)]) -> f64 {
    let result = pairs
        .iter()
        .filter(|(_, w)| *w > 0)
        .map(|(v, _)| *v)
        .fold(f64::NEG_INFINITY, f64::max);
    if result.is_finite() {
        result
    } else {
        0.0
    }
}

/// Sort pairs by value, dropping zero weights
fn sorted_pairs(pairs: &[(f64, u64)]) -> Vec<(f64, u64)> {
    let mut sorted: Vec<(f64, u64)> = pairs.iter().copied().filter(|(_, w)| *w > 0).collect();
    sorted.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
    sorted
}

/// Walk cumulative weights to find the value holding the 0-based rank in
/// the expanded observation sequence
fn value_at_rank(sorted: &[(f64, u64)], rank: u64) -> f64 {
    let mut seen = 0u64;
    for (value, weight) in sorted {
        seen += weight;
        if rank < seen {
            return *value;
        }
    }
    sorted.last().map(|(v, _)| *v).unwrap_or(0.0)
}
