//! Categorical count metrics over record attributes

use crate::result::{GenderBreakdownResult, GenderValues, GroupedCountResult, ShareResult};
use muse_domain::ArtworkRecord;
use muse_stats::{count_by, percent, GenderCounts};
use tracing::debug;

/// Overall artwork counts and share per creator gender
pub fn gender_distribution(records: &[ArtworkRecord]) -> GenderBreakdownResult {
    debug!(records = records.len(), "computing gender distribution");

    let mut counts = GenderCounts::default();
    for record in records {
        counts.add(record.gender);
    }

    let total = counts.total();
    GenderBreakdownResult {
        counts,
        percentages: GenderValues {
            male: percent(counts.male, total),
            female: percent(counts.female, total),
            unknown: percent(counts.unknown, total),
        },
    }
}

/// Artwork counts per object type, top `top_n` by total
pub fn object_type_distribution(records: &[ArtworkRecord], top_n: usize) -> GroupedCountResult {
    debug!(records = records.len(), top_n, "computing object types");

    let counter = count_by(records, |record| record.object_type.clone());
    let totals = counter.totals();
    GroupedCountResult::from_groups(counter.into_top(top_n), totals)
}

/// Artwork counts per creator nationality, top `top_n` by total
pub fn nationality_distribution(records: &[ArtworkRecord], top_n: usize) -> GroupedCountResult {
    debug!(records = records.len(), top_n, "computing nationalities");

    let counter = count_by(records, |record| record.nationality.clone());
    let totals = counter.totals();
    GroupedCountResult::from_groups(counter.into_top(top_n), totals)
}

/// Artwork counts per museum department, top `top_n` by total
pub fn department_distribution(records: &[ArtworkRecord], top_n: usize) -> GroupedCountResult {
    debug!(records = records.len(), top_n, "computing departments");

    let counter = count_by(records, |record| record.department.clone());
    let totals = counter.totals();
    GroupedCountResult::from_groups(counter.into_top(top_n), totals)
}

/// Share of artworks currently on display, per gender
pub fn display_share(records: &[ArtworkRecord]) -> ShareResult {
    debug!(records = records.len(), "computing display share");
    attribute_share(records, |record| record.on_display)
}

/// Share of artworks with a digitized image, per gender
pub fn image_share(records: &[ArtworkRecord]) -> ShareResult {
    debug!(records = records.len(), "computing image share");
    attribute_share(records, |record| record.has_image)
}

fn attribute_share<F>(records: &[ArtworkRecord], predicate: F) -> ShareResult
where
    F: Fn(&ArtworkRecord) -> bool,
{
    let mut counts = GenderCounts::default();
    let mut totals = GenderCounts::default();
    for record in records {
        totals.add(record.gender);
        if predicate(record) {
            counts.add(record.gender);
        }
    }

    ShareResult {
        counts,
        totals,
        percentages: GenderValues::rates(counts, totals),
    }
}

/// Depicted-person genders against creator gender.
///
/// Each depicted person contributes one increment, so a group portrait
/// counts several times for one artwork.
pub fn depicted_gender_distribution(records: &[ArtworkRecord]) -> GroupedCountResult {
    debug!(records = records.len(), "computing depicted genders");

    let counter = count_by(records, |record| {
        record
            .depicted_persons
            .iter()
            .map(|person| person.gender.to_string())
            .collect::<Vec<_>>()
    });
    let totals = counter.totals();
    GroupedCountResult::from_groups(counter.into_sorted(), totals)
}
