// src/handlers/leaderboard.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Serialize;

use crate::{
    error::AppError,
    models::{
        query::{LeaderboardQuery, PageQuery},
        view_state::{Tab, ViewState},
    },
    source::LeaderboardSource,
    view::{
        analytics::analytics,
        compose,
        pagination::PAGE_SIZE,
        subject::available_subjects,
        tab::available_tabs,
    },
};

/// Which upstream page backs the view.
///
/// The overall, unfiltered table is paged by the server. Filtered and tabbed
/// views work on the first fetched page only: filter and tab changes always
/// return the viewer to page 1, and the client cannot narrow entries it never
/// retrieved.
fn upstream_page(state: &ViewState) -> u32 {
    if state.uses_podium_convention() {
        state.page
    } else {
        1
    }
}

/// Composes the leaderboard table for the requested tab, filters, sort and page.
pub async fn get_leaderboard(
    State(source): State<Arc<dyn LeaderboardSource>>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<impl IntoResponse, AppError> {
    let state = query.into_view_state()?;
    let upstream = upstream_page(&state);
    let page = source.fetch_page(upstream, PAGE_SIZE as u32).await?;

    let mut view = compose(Some(&page), &state);

    // Later overall pages still show the top three above the table.
    if state.tab == Tab::Overall && state.page > 1 {
        if upstream == 1 {
            view = view.with_overall_podium(&page, &state);
        } else {
            let first = source.fetch_page(1, PAGE_SIZE as u32).await?;
            view = view.with_overall_podium(&first, &state);
        }
    }

    tracing::debug!(
        tab = %state.tab,
        page = state.page,
        rows = view.rows.len(),
        total_pages = view.total_pages,
        "Composed leaderboard view"
    );

    Ok(Json(view))
}

/// Chart data comparing the viewer with the fetched page.
pub async fn get_analytics(
    State(source): State<Arc<dyn LeaderboardSource>>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = source.fetch_page(query.page()?, PAGE_SIZE as u32).await?;

    if page.me.is_none() {
        tracing::debug!("No viewer record, analytics will be empty");
    }

    Ok(Json(analytics(
        &page.entries,
        page.me.as_ref(),
        page.total_results,
    )))
}

#[derive(Debug, Serialize)]
pub struct SubjectsResponse {
    pub subjects: Vec<String>,
    pub tabs: Vec<Tab>,
}

/// Subject titles seen on a page and the tabs they enable.
pub async fn get_subjects(
    State(source): State<Arc<dyn LeaderboardSource>>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = source.fetch_page(query.page()?, PAGE_SIZE as u32).await?;
    let subjects = available_subjects(&page.entries);
    let tabs = available_tabs(&subjects);

    Ok(Json(SubjectsResponse { subjects, tabs }))
}
