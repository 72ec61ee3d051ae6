// src/view/subject.rs

use crate::models::entry::{Entry, SubjectScore};

/// A subject score strictly above this counts as a strength.
pub const GOOD_SCORE_THRESHOLD: i32 = 50;

/// Finds the first subject whose title contains `fragment`, ignoring case.
///
/// Subjects are identified by title, not id: "physics" matches
/// "Physics (Mechanics)" as well as "Applied Physics".
pub fn find_subject<'a>(entry: &'a Entry, fragment: &str) -> Option<&'a SubjectScore> {
    let needle = fragment.to_lowercase();
    entry
        .subjects
        .iter()
        .find(|s| s.subject.title.to_lowercase().contains(&needle))
}

/// Score in the matching subject, or 0 when the entry has none.
pub fn score_for(entry: &Entry, fragment: &str) -> i32 {
    find_subject(entry, fragment).map_or(0, |s| s.score)
}

/// Accuracy in the matching subject, or 0 when the entry has none.
pub fn accuracy_for(entry: &Entry, fragment: &str) -> f64 {
    find_subject(entry, fragment).map_or(0.0, |s| s.accuracy)
}

pub fn has_subject(entry: &Entry, fragment: &str) -> bool {
    find_subject(entry, fragment).is_some()
}

pub fn is_strength(entry: &Entry, fragment: &str) -> bool {
    score_for(entry, fragment) > GOOD_SCORE_THRESHOLD
}

/// Distinct subject titles across all entries, in order of first appearance.
pub fn available_subjects(entries: &[Entry]) -> Vec<String> {
    let mut titles: Vec<String> = Vec::new();
    for subject in entries.iter().flat_map(|e| &e.subjects) {
        if !titles.contains(&subject.subject.title) {
            titles.push(subject.subject.title.clone());
        }
    }
    titles
}
