// src/models/entry.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Identity of a ranked participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Avatar reference. The upstream API sends an empty string when unset.
    #[serde(rename = "profilePicture", default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// A subject as labelled by the test series.
/// Titles are free text (e.g. "Physics (Mechanics)").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectRef {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
}

/// A participant's result in one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectScore {
    #[serde(rename = "subjectId")]
    pub subject: SubjectRef,
    #[serde(rename = "totalMarkScored")]
    pub score: i32,
    #[serde(default)]
    pub accuracy: f64,
}

/// One ranked participant's results on a leaderboard page.
///
/// `rank` is assigned by the server and is never recomputed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub rank: u32,
    #[serde(rename = "userId")]
    pub user: UserInfo,
    #[serde(rename = "totalMarkScored")]
    pub total_score: i32,
    #[serde(default)]
    pub accuracy: f64,
    #[serde(default)]
    pub subjects: Vec<SubjectScore>,

    // Informational only, not checked against `total_score`.
    #[serde(default)]
    pub marks_gained: i32,
    #[serde(default)]
    pub marks_lost: i32,
    #[serde(default)]
    pub unanswered_marks: i32,
}

/// The viewer's own standing. Same shape as any other entry, but it may sit
/// outside the fetched page.
pub type CurrentUser = Entry;

/// One resolved fetch from a leaderboard source.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardPage {
    pub entries: Vec<Entry>,
    pub me: Option<CurrentUser>,
    /// Authoritative page count when the server reports one.
    pub total_pages: Option<u32>,
    /// Total number of ranked participants when the server reports it.
    pub total_results: Option<u32>,
    pub fetched_at: DateTime<Utc>,
}

impl LeaderboardPage {
    pub fn new(entries: Vec<Entry>, me: Option<CurrentUser>) -> Self {
        Self {
            entries,
            me,
            total_pages: None,
            total_results: None,
            fetched_at: Utc::now(),
        }
    }
}

/// Wire envelope returned by the upstream leaderboard API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<ApiData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub me: Option<CurrentUser>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_results: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiData {
    #[serde(default)]
    pub results: Vec<Entry>,
}

impl ApiResponse {
    /// Unwraps the envelope into a page, or surfaces the upstream message.
    pub fn into_page(self) -> Result<LeaderboardPage, AppError> {
        if !self.success {
            let message = if self.message.is_empty() {
                "Failed to fetch leaderboard data".to_string()
            } else {
                self.message
            };
            return Err(AppError::Upstream(message));
        }

        let mut page = LeaderboardPage::new(
            self.data.map(|d| d.results).unwrap_or_default(),
            self.me,
        );
        // A zero page count means "not reported".
        page.total_pages = self.total_pages.filter(|&n| n > 0);
        page.total_results = self.total_results;
        Ok(page)
    }
}
