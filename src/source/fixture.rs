// src/source/fixture.rs

use std::path::Path;

use async_trait::async_trait;

use crate::{
    error::AppError,
    models::entry::{ApiResponse, CurrentUser, Entry, LeaderboardPage},
    source::LeaderboardSource,
};

/// In-memory leaderboard that pages through a fixed ranked list the way the
/// remote API does.
#[derive(Debug, Clone)]
pub struct FixtureSource {
    entries: Vec<Entry>,
    me: Option<CurrentUser>,
}

impl FixtureSource {
    pub fn new(mut entries: Vec<Entry>, me: Option<CurrentUser>) -> Self {
        entries.sort_by_key(|e| e.rank);
        Self { entries, me }
    }

    /// Loads a JSON file shaped like an upstream API response.
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .inspect_err(|e| tracing::error!("Failed to read fixture {}: {}", path.display(), e))?;
        let response: ApiResponse = serde_json::from_str(&raw)
            .inspect_err(|e| tracing::error!("Invalid fixture {}: {}", path.display(), e))?;
        let page = response.into_page()?;

        tracing::info!(
            "Loaded {} leaderboard entries from {}",
            page.entries.len(),
            path.display()
        );
        Ok(Self::new(page.entries, page.me))
    }
}

#[async_trait]
impl LeaderboardSource for FixtureSource {
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<LeaderboardPage, AppError> {
        let limit = limit.max(1) as usize;
        let start = (page.max(1) as usize - 1).saturating_mul(limit);
        let results: Vec<Entry> = self.entries.iter().skip(start).take(limit).cloned().collect();

        let total_pages = self.entries.len().div_ceil(limit).max(1);

        let mut data = LeaderboardPage::new(results, self.me.clone());
        data.total_pages = u32::try_from(total_pages).ok();
        data.total_results = u32::try_from(self.entries.len()).ok();
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::test_support::ranked;

    #[tokio::test]
    async fn serves_pages_like_the_api() {
        let mut entries = ranked(25);
        entries.reverse();
        let source = FixtureSource::new(entries, None);

        let page = source.fetch_page(2, 10).await.unwrap();
        let ranks: Vec<u32> = page.entries.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, (11..=20).collect::<Vec<_>>());
        assert_eq!(page.total_pages, Some(3));
        assert_eq!(page.total_results, Some(25));

        let past_end = source.fetch_page(9, 10).await.unwrap();
        assert!(past_end.entries.is_empty());
    }

    #[tokio::test]
    async fn loads_sample_fixture() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/leaderboard.json");
        let source = FixtureSource::from_file(path).await.unwrap();

        let page = source.fetch_page(2, 10).await.unwrap();
        assert_eq!(page.entries.len(), 3);
        assert_eq!(page.entries[0].rank, 11);
        assert_eq!(page.total_pages, Some(2));
    }

    #[tokio::test]
    async fn missing_fixture_is_internal_error() {
        let result = FixtureSource::from_file("fixtures/does-not-exist.json").await;
        assert!(matches!(result, Err(AppError::InternalServerError(_))));
    }

    #[tokio::test]
    async fn empty_fixture_reports_one_page() {
        let source = FixtureSource::new(Vec::new(), None);
        let page = source.fetch_page(1, 10).await.unwrap();
        assert!(page.entries.is_empty());
        assert_eq!(page.total_pages, Some(1));
    }
}
