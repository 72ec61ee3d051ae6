// src/source/mock_viewer.rs

use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use rand::seq::SliceRandom;

use crate::{
    error::AppError,
    models::entry::{CurrentUser, LeaderboardPage, SubjectRef, SubjectScore, UserInfo},
    source::LeaderboardSource,
};

/// Fills in a stand-in viewer when the inner source returns none, so demo
/// deployments always have someone to highlight.
///
/// The first non-empty page decides who the viewer is, picked at random; every
/// later fetch, on any page, reuses that entry. Until then an empty page gets a
/// fixed placeholder.
pub struct MockViewer {
    inner: Arc<dyn LeaderboardSource>,
    viewer: OnceLock<CurrentUser>,
}

impl MockViewer {
    pub fn new(inner: Arc<dyn LeaderboardSource>) -> Self {
        Self {
            inner,
            viewer: OnceLock::new(),
        }
    }

    fn viewer_for(&self, page: &LeaderboardPage) -> CurrentUser {
        if let Some(viewer) = self.viewer.get() {
            return viewer.clone();
        }
        match page.entries.choose(&mut rand::thread_rng()) {
            Some(picked) => {
                let viewer = self.viewer.get_or_init(|| picked.clone());
                tracing::info!("Mock viewer is {}", viewer.user.name);
                viewer.clone()
            }
            None => placeholder_viewer(),
        }
    }
}

#[async_trait]
impl LeaderboardSource for MockViewer {
    async fn fetch_page(&self, page: u32, limit: u32) -> Result<LeaderboardPage, AppError> {
        let mut data = self.inner.fetch_page(page, limit).await?;
        if data.me.is_none() {
            data.me = Some(self.viewer_for(&data));
        }
        Ok(data)
    }
}

pub fn placeholder_viewer() -> CurrentUser {
    let subjects = vec![
        subject("physics-id", "Physics", 65, 78.5),
        subject("chemistry-id", "Chemistry", 72, 82.3),
        subject("maths-id", "Mathematics", 68, 75.8),
    ];
    let total_score: i32 = subjects.iter().map(|s| s.score).sum();

    CurrentUser {
        rank: 56,
        user: UserInfo {
            id: "current-user-id".to_string(),
            name: "You".to_string(),
            avatar: None,
        },
        total_score,
        accuracy: 79.5,
        subjects,
        marks_gained: total_score,
        marks_lost: 300 - total_score,
        unanswered_marks: 0,
    }
}

fn subject(id: &str, title: &str, score: i32, accuracy: f64) -> SubjectScore {
    SubjectScore {
        subject: SubjectRef {
            id: id.to_string(),
            title: title.to_string(),
        },
        score,
        accuracy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{source::FixtureSource, view::test_support::ranked};

    #[tokio::test]
    async fn picks_viewer_from_fetched_page() {
        let source = MockViewer::new(Arc::new(FixtureSource::new(ranked(12), None)));
        let page = source.fetch_page(2, 10).await.unwrap();
        let me = page.me.expect("mock viewer");
        assert!(page.entries.iter().any(|e| e.user.id == me.user.id));
    }

    #[tokio::test]
    async fn viewer_stays_the_same_across_fetches() {
        let source = MockViewer::new(Arc::new(FixtureSource::new(ranked(40), None)));

        let first = source.fetch_page(3, 10).await.unwrap().me.unwrap();
        for page in [1, 2, 3, 4, 1] {
            let me = source.fetch_page(page, 10).await.unwrap().me.unwrap();
            assert_eq!(me.user.id, first.user.id);
        }
        // Picked from the first page served.
        assert!((21..=30).contains(&first.rank));
    }

    #[tokio::test]
    async fn placeholder_does_not_pin_the_viewer() {
        let source = MockViewer::new(Arc::new(FixtureSource::new(ranked(5), None)));

        let empty = source.fetch_page(4, 10).await.unwrap().me.unwrap();
        assert_eq!(empty.user.name, "You");

        let me = source.fetch_page(1, 10).await.unwrap().me.unwrap();
        assert!((1..=5).contains(&me.rank));
    }

    #[tokio::test]
    async fn keeps_real_viewer() {
        let real = ranked(30).remove(27);
        let source = MockViewer::new(Arc::new(FixtureSource::new(ranked(12), Some(real.clone()))));
        let page = source.fetch_page(1, 10).await.unwrap();
        assert_eq!(page.me, Some(real));
    }

    #[tokio::test]
    async fn empty_page_gets_placeholder() {
        let source = MockViewer::new(Arc::new(FixtureSource::new(Vec::new(), None)));
        let page = source.fetch_page(1, 10).await.unwrap();
        let me = page.me.unwrap();
        assert_eq!(me.user.name, "You");
        assert_eq!(me.rank, 56);
        assert_eq!(me.total_score, 205);
    }
}
