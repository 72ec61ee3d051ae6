// src/view/tab.rs

use crate::{
    models::{entry::Entry, view_state::Tab},
    view::subject::{has_subject, score_for},
};

/// How many entries the "Top 10" tab keeps.
pub const TOP_PERFORMERS_LIMIT: usize = 10;

/// Narrows and reorders the working set for the selected tab.
///
/// * `Overall` keeps everything and restores ascending rank order, since a
///   prior filter pass may have been fed data in some other order.
/// * `TopPerformers` keeps the first ten entries as they stand.
/// * Subject tabs drop entries without that subject and order the rest by
///   subject score, highest first. Equal scores keep their incoming order.
pub fn apply_tab(mut entries: Vec<Entry>, tab: Tab) -> Vec<Entry> {
    match tab {
        Tab::Overall => {
            entries.sort_by_key(|e| e.rank);
            entries
        }
        Tab::TopPerformers => {
            entries.truncate(TOP_PERFORMERS_LIMIT);
            entries
        }
        Tab::Physics | Tab::Chemistry | Tab::Maths => {
            let Some(fragment) = tab.subject_fragment() else {
                return entries;
            };
            entries.retain(|e| has_subject(e, fragment));
            // sort_by is stable, which is the tie-break.
            entries.sort_by(|a, b| score_for(b, fragment).cmp(&score_for(a, fragment)));
            entries
        }
    }
}

/// Tabs that make sense for the given subject titles: overall and top ten
/// always, plus one per recognised subject.
pub fn available_tabs(subject_titles: &[String]) -> Vec<Tab> {
    let mut tabs = vec![Tab::Overall, Tab::TopPerformers];
    for title in subject_titles {
        let title = title.to_lowercase();
        let tab = [Tab::Physics, Tab::Chemistry, Tab::Maths]
            .into_iter()
            .find(|t| t.subject_fragment().is_some_and(|f| title.contains(f)));
        if let Some(tab) = tab {
            if !tabs.contains(&tab) {
                tabs.push(tab);
            }
        }
    }
    tabs
}
