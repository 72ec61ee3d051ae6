// src/view/sort.rs

use std::cmp::Ordering;

use crate::{
    models::{
        entry::Entry,
        view_state::{SortDirection, SortField, SortSpec},
    },
    view::subject::score_for,
};

/// Orders entries by a column. `None` leaves the input order untouched.
///
/// The sort is stable: entries with equal keys stay in input order in both
/// directions.
pub fn sort_entries(mut entries: Vec<Entry>, sort: Option<&SortSpec>) -> Vec<Entry> {
    if let Some(spec) = sort {
        entries.sort_by(|a, b| {
            let ordering = compare(a, b, &spec.field);
            match spec.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }
    entries
}

/// Ascending comparison of two entries on a single field.
pub fn compare(a: &Entry, b: &Entry, field: &SortField) -> Ordering {
    match field {
        SortField::Rank => a.rank.cmp(&b.rank),
        SortField::Name => compare_names(&a.user.name, &b.user.name),
        SortField::TotalScore => a.total_score.cmp(&b.total_score),
        SortField::Accuracy => a.accuracy.total_cmp(&b.accuracy),
        SortField::Subject(fragment) => score_for(a, fragment).cmp(&score_for(b, fragment)),
    }
}

/// Case-folded comparison so "asha" and "Asha" sort together; the raw
/// strings only decide between names that fold to the same text.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
