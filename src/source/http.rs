// src/source/http.rs

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::{
    error::AppError,
    models::entry::{ApiResponse, LeaderboardPage},
    source::LeaderboardSource,
};

/// Client for the remote leaderboard API.
#[derive(Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpSource {
    pub fn new(url: Url, timeout: Duration) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                AppError::InternalServerError(format!("Failed to build HTTP client: {}", e))
            })?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl LeaderboardSource for HttpSource {
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<LeaderboardPage, AppError> {
        let response = self
            .client
            .get(self.url.clone())
            .query(&[("page", page), ("limit", limit)])
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Leaderboard request failed: {:?}", e);
                AppError::from(e)
            })?;

        if !response.status().is_success() {
            tracing::error!("Leaderboard API returned {}", response.status());
            return Err(AppError::Upstream(format!(
                "Leaderboard API returned {}",
                response.status()
            )));
        }

        let body: ApiResponse = response.json().await?;
        let page_data = body.into_page()?;

        if page_data.total_pages.is_none() {
            tracing::debug!("No totalPages in upstream response, page count will be derived");
        }
        tracing::debug!(
            page,
            entries = page_data.entries.len(),
            has_me = page_data.me.is_some(),
            "Fetched leaderboard page"
        );

        Ok(page_data)
    }
}
