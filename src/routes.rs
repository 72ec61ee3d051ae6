// src/routes.rs

use axum::{Router, http::Method, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{health, leaderboard},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Mounts the leaderboard view, analytics and subject endpoints.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (leaderboard source, config).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let leaderboard_routes = Router::new()
        .route("/", get(leaderboard::get_leaderboard))
        .route("/analytics", get(leaderboard::get_analytics))
        .route("/subjects", get(leaderboard::get_subjects));

    Router::new()
        .route("/health", get(health::health))
        .nest("/api/leaderboard", leaderboard_routes)
        .fallback(health::not_found)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
