// src/handlers/health.rs

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;

use crate::{
    config::{Config, SourceKind},
    error::AppError,
};

pub async fn health(State(config): State<Config>) -> impl IntoResponse {
    let source = match config.source {
        SourceKind::Http => "http",
        SourceKind::Fixture => "fixture",
    };
    Json(json!({
        "status": "ok",
        "source": source,
        "mock_viewer": config.mock_viewer,
    }))
}

/// Fallback for unknown paths.
pub async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
