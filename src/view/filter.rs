// src/view/filter.rs
//
// Predicate filtering over a page of entries. Surviving entries keep their
// input order.

use crate::{
    models::{
        entry::Entry,
        filter::{AccuracyRange, FilterCriteria, ScoreRange},
    },
    view::subject::is_strength,
};

/// Returns the entries that satisfy every active predicate of `criteria`.
pub fn filter_entries(entries: &[Entry], criteria: &FilterCriteria) -> Vec<Entry> {
    let search = criteria.normalized_search();
    let subjects = criteria.selected_subjects();

    entries
        .iter()
        .filter(|entry| {
            search.as_deref().is_none_or(|term| matches_search(entry, term))
                && criteria
                    .score_range
                    .is_none_or(|range| in_score_range(entry, &range))
                && criteria
                    .accuracy_range
                    .is_none_or(|range| in_accuracy_range(entry, &range))
                && subjects.is_none_or(|list| has_any_strength(entry, list))
        })
        .cloned()
        .collect()
}

/// `term` is expected trimmed and lowercased.
pub fn matches_search(entry: &Entry, term: &str) -> bool {
    entry.user.name.to_lowercase().contains(term)
}

pub fn in_score_range(entry: &Entry, range: &ScoreRange) -> bool {
    range.contains(entry.total_score)
}

pub fn in_accuracy_range(entry: &Entry, range: &AccuracyRange) -> bool {
    range.contains(entry.accuracy)
}

/// True when any of `subjects` is a strength of the entry.
pub fn has_any_strength(entry: &Entry, subjects: &[String]) -> bool {
    subjects.iter().any(|s| is_strength(entry, s))
}
