// src/view/compose.rs

use serde::Serialize;

use crate::{
    models::{
        entry::{CurrentUser, Entry, LeaderboardPage},
        view_state::{Tab, ViewState},
    },
    view::{
        filter::filter_entries,
        pagination::{Convention, PAGE_SIZE, PODIUM_SIZE, paginate, starting_rank},
        sort::sort_entries,
        subject::available_subjects,
        tab::{apply_tab, available_tabs},
    },
};

/// Distinguishes "nothing fetched yet" from "fetched, but nothing matches".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewStatus {
    Loading,
    Empty,
    Ready,
}

/// A table row with its display position.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRow {
    pub position: u32,
    pub is_current_user: bool,
    #[serde(flatten)]
    pub entry: Entry,
}

/// Everything the presentation layer needs to draw one leaderboard view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposedView {
    pub status: ViewStatus,
    pub rows: Vec<DisplayRow>,
    pub starting_rank: u32,
    pub current_page: u32,
    pub total_pages: u32,
    pub subjects: Vec<String>,
    pub tabs: Vec<Tab>,
    pub podium: Vec<Entry>,
    pub current_user: Option<CurrentUser>,
    pub active_filters: usize,
}

impl ComposedView {
    fn loading(state: &ViewState) -> Self {
        Self {
            status: ViewStatus::Loading,
            rows: Vec::new(),
            starting_rank: starting_rank(state.page, PAGE_SIZE, convention_for(state, None)),
            current_page: state.page.max(1),
            total_pages: 1,
            subjects: Vec::new(),
            tabs: available_tabs(&[]),
            podium: Vec::new(),
            current_user: None,
            active_filters: state.filters.active_count(),
        }
    }

    /// Fills the podium from the first page when the overall tab is showing a
    /// later page, which does not itself contain the top three.
    pub fn with_overall_podium(mut self, first_page: &LeaderboardPage, state: &ViewState) -> Self {
        if state.tab == Tab::Overall {
            self.podium = top_three(&first_page.entries);
        }
        self
    }
}

/// Filter, then tab narrowing. The result is the working set the table pages
/// through.
pub fn working_set(entries: &[Entry], state: &ViewState) -> Vec<Entry> {
    apply_tab(filter_entries(entries, &state.filters), state.tab)
}

pub fn convention_for(state: &ViewState, server_total_pages: Option<u32>) -> Convention {
    if state.uses_podium_convention() {
        Convention::Podium { server_total_pages }
    } else {
        Convention::Uniform
    }
}

/// Derives the view for `state` from a fetched page.
///
/// `None` means no page has resolved yet; the result is an empty view with
/// `ViewStatus::Loading`. Column sort is applied to the visible slice only,
/// after pagination, so it never pulls rows in from other pages.
pub fn compose(page: Option<&LeaderboardPage>, state: &ViewState) -> ComposedView {
    let Some(page) = page else {
        return ComposedView::loading(state);
    };

    let working = working_set(&page.entries, state);
    let convention = convention_for(state, page.total_pages);
    let slice = paginate(&working, state.page, PAGE_SIZE, convention);

    let viewer_id = page.me.as_ref().map(|me| me.user.id.as_str());
    let rows = sort_entries(slice.rows, state.sort.as_ref())
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let is_current_user = viewer_id == Some(entry.user.id.as_str());
            DisplayRow {
                position: slice.starting_rank.saturating_add(index as u32),
                is_current_user,
                entry,
            }
        })
        .collect();

    let podium = match state.tab {
        // Later overall pages get their podium from page 1.
        Tab::Overall if state.page > 1 => Vec::new(),
        Tab::Overall => top_three(&page.entries),
        _ => working.iter().take(PODIUM_SIZE).cloned().collect(),
    };

    let subjects = available_subjects(&page.entries);
    let tabs = available_tabs(&subjects);

    ComposedView {
        status: if working.is_empty() {
            ViewStatus::Empty
        } else {
            ViewStatus::Ready
        },
        rows,
        starting_rank: slice.starting_rank,
        current_page: state.page.max(1),
        total_pages: slice.total_pages,
        subjects,
        tabs,
        podium,
        current_user: page.me.clone(),
        active_filters: state.filters.active_count(),
    }
}

/// The three best-ranked entries, ignoring any filter.
fn top_three(entries: &[Entry]) -> Vec<Entry> {
    let mut top = apply_tab(entries.to_vec(), Tab::Overall);
    top.truncate(PODIUM_SIZE);
    top
}
