// src/source/mod.rs

pub mod fixture;
pub mod http;
pub mod mock_viewer;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    config::{Config, SourceKind},
    error::AppError,
    models::entry::LeaderboardPage,
};

pub use fixture::FixtureSource;
pub use http::HttpSource;
pub use mock_viewer::MockViewer;

/// Where leaderboard pages come from. Ranks arrive precomputed.
#[async_trait]
pub trait LeaderboardSource: Send + Sync {
    /// Fetches one page (1-based) of `limit` entries plus the viewer's record.
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<LeaderboardPage, AppError>;
}

/// Builds the source selected by the configuration.
pub async fn from_config(config: &Config) -> Result<Arc<dyn LeaderboardSource>, AppError> {
    let source: Arc<dyn LeaderboardSource> = match config.source {
        SourceKind::Http => Arc::new(HttpSource::new(
            config.api_url.clone(),
            config.upstream_timeout,
        )?),
        SourceKind::Fixture => {
            let path = config.fixture_path.as_ref().ok_or_else(|| {
                AppError::InternalServerError(
                    "LEADERBOARD_FIXTURE must be set for the fixture source".to_string(),
                )
            })?;
            Arc::new(FixtureSource::from_file(path).await?)
        }
    };

    if config.mock_viewer {
        tracing::info!("Mock viewer enabled");
        return Ok(Arc::new(MockViewer::new(source)));
    }
    Ok(source)
}
