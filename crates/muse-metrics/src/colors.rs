//! Color metrics over artwork palettes

use crate::result::GroupedCountResult;
use muse_domain::ArtworkRecord;
use muse_stats::{family_of_hex, normalize_hex, CategoryCounter, ColorFamily};
use tracing::debug;

/// Artwork color occurrences per named family and creator gender.
///
/// Labels follow the canonical family order rather than count order, so
/// downstream legends stay stable across datasets. Every family appears
/// even with zero occurrences.
pub fn color_family_distribution(records: &[ArtworkRecord]) -> GroupedCountResult {
    debug!(records = records.len(), "computing color families");

    let mut counter = CategoryCounter::new();
    for family in ColorFamily::ALL {
        counter.ensure(family.name());
    }
    for record in records {
        for hex in &record.colors {
            counter.add(family_of_hex(hex).name(), record.gender);
        }
    }

    let totals = counter.totals();
    GroupedCountResult::from_groups(counter.into_ordered(), totals)
}

/// The `top_n` most frequent exact colors, keyed by uppercase hex.
///
/// Keys are normalized for counting only; strings that are not a 6-digit
/// hex color are skipped.
pub fn dominant_colors(records: &[ArtworkRecord], top_n: usize) -> GroupedCountResult {
    debug!(records = records.len(), top_n, "computing dominant colors");

    let mut counter = CategoryCounter::new();
    for record in records {
        for hex in &record.colors {
            if let Some(key) = normalize_hex(hex) {
                counter.add(&key, record.gender);
            }
        }
    }

    let totals = counter.totals();
    GroupedCountResult::from_groups(counter.into_top(top_n), totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use muse_domain::Gender;

    #[test]
    fn test_family_distribution_fixed_label_order() {
        let records = vec![ArtworkRecord::new(Gender::Female).with_colors(vec![
            "#FF0000".to_string(),
            "#0000FF".to_string(),
            "#0000FE".to_string(),
        ])];
        let result = color_family_distribution(&records);

        // All 13 families present, in declaration order, regardless of counts
        assert_eq!(result.labels.len(), 13);
        assert_eq!(result.labels[0], "Red");
        let blue_idx = result.labels.iter().position(|l| l == "Blue").unwrap();
        assert_eq!(result.counts.female[blue_idx], 2);
        assert_eq!(result.totals.female, 3);
    }

    #[test]
    fn test_family_distribution_unparseable_counts_as_gray() {
        let records =
            vec![ArtworkRecord::new(Gender::Male).with_colors(vec!["garbage".to_string()])];
        let result = color_family_distribution(&records);
        let gray_idx = result.labels.iter().position(|l| l == "Gray").unwrap();
        assert_eq!(result.counts.male[gray_idx], 1);
    }

    #[test]
    fn test_dominant_colors_normalizes_case() {
        let records = vec![
            ArtworkRecord::new(Gender::Male).with_colors(vec!["#aa3311".to_string()]),
            ArtworkRecord::new(Gender::Female).with_colors(vec!["#AA3311".to_string()]),
            ArtworkRecord::new(Gender::Male).with_colors(vec!["bad".to_string()]),
        ];
        let result = dominant_colors(&records, 10);

        assert_eq!(result.labels, vec!["#AA3311"]);
        assert_eq!(result.counts.male, vec![1]);
        assert_eq!(result.counts.female, vec![1]);
    }

    #[test]
    fn test_dominant_colors_empty() {
        let result = dominant_colors(&[], 10);
        assert!(result.labels.is_empty());
        assert_eq!(result.totals.total(), 0);
    }
}
