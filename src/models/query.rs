// src/models/query.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        filter::{FilterCriteria, Range, ScoreRange},
        view_state::{SortDirection, SortField, SortSpec, Tab, ViewAction, ViewState},
    },
};

/// Query parameters for `GET /api/leaderboard`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct LeaderboardQuery {
    #[validate(range(min = 1, message = "Page numbers start at 1"))]
    pub page: Option<u32>,

    pub tab: Option<String>,

    #[validate(length(max = 100, message = "Search term must be at most 100 chars"))]
    pub search: Option<String>,

    /// Preset score band: beginner, intermediate or advanced.
    pub band: Option<String>,

    #[validate(range(min = 0, max = 300))]
    pub score_min: Option<i32>,
    #[validate(range(min = 0, max = 300))]
    pub score_max: Option<i32>,

    #[validate(range(min = 0.0, max = 100.0))]
    pub accuracy_min: Option<f64>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub accuracy_max: Option<f64>,

    /// Comma-separated subject name fragments.
    pub subjects: Option<String>,

    /// `rank`, `name`, `totalScore`, `accuracy` or `subject:<fragment>`.
    pub sort: Option<String>,
    pub direction: Option<String>,
}

impl LeaderboardQuery {
    /// Builds the view state by replaying the controls the query describes.
    pub fn into_view_state(self) -> Result<ViewState, AppError> {
        self.validate()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let tab = match self.tab.as_deref() {
            Some(raw) if !raw.trim().is_empty() => raw.parse::<Tab>()?,
            _ => Tab::Overall,
        };

        let sort = match self.sort.as_deref() {
            Some(raw) if !raw.trim().is_empty() => {
                let field = raw.parse::<SortField>()?;
                let direction = match self.direction.as_deref() {
                    Some(d) => d.parse::<SortDirection>()?,
                    None => SortDirection::default(),
                };
                Some(SortSpec::new(field, direction))
            }
            _ => None,
        };

        let filters = self.filter_criteria()?;

        Ok(ViewState::default()
            .apply(ViewAction::SelectTab(tab))
            .apply(ViewAction::SetFilters(filters))
            .apply(ViewAction::SetSort(sort))
            .apply(ViewAction::GoToPage(self.page.unwrap_or(1))))
    }

    fn filter_criteria(&self) -> Result<FilterCriteria, AppError> {
        let mut criteria = FilterCriteria::default();

        if let Some(term) = self.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            criteria = criteria.with_search(term);
        }

        if let Some(band) = self.band.as_deref() {
            let range = ScoreRange::preset(band)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown score band '{}'", band)))?;
            criteria.score_range = Some(range);
        }
        if self.score_min.is_some() || self.score_max.is_some() {
            let min = self.score_min.unwrap_or(0);
            let max = self.score_max.unwrap_or(300);
            if min > max {
                return Err(AppError::BadRequest(
                    "score_min must not exceed score_max".to_string(),
                ));
            }
            criteria.score_range = Some(Range::new(min, max));
        }

        if self.accuracy_min.is_some() || self.accuracy_max.is_some() {
            let min = self.accuracy_min.unwrap_or(0.0);
            let max = self.accuracy_max.unwrap_or(100.0);
            if min > max {
                return Err(AppError::BadRequest(
                    "accuracy_min must not exceed accuracy_max".to_string(),
                ));
            }
            criteria.accuracy_range = Some(Range::new(min, max));
        }

        if let Some(raw) = self.subjects.as_deref() {
            let subjects: Vec<&str> = raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect();
            if !subjects.is_empty() {
                criteria = criteria.with_subjects(subjects);
            }
        }

        Ok(criteria)
    }
}

/// Query parameters for endpoints that only need a page number.
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
pub struct PageQuery {
    #[validate(range(min = 1, message = "Page numbers start at 1"))]
    pub page: Option<u32>,
}

impl PageQuery {
    pub fn page(&self) -> Result<u32, AppError> {
        self.validate()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        Ok(self.page.unwrap_or(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_is_default_view() {
        let state = LeaderboardQuery::default().into_view_state().unwrap();
        assert_eq!(state, ViewState::default());
    }

    #[test]
    fn builds_filters_sort_and_page() {
        let query = LeaderboardQuery {
            page: Some(2),
            tab: Some("chemistry".to_string()),
            search: Some("  Ra ".to_string()),
            score_min: Some(100),
            subjects: Some("physics, maths,".to_string()),
            sort: Some("accuracy".to_string()),
            direction: Some("desc".to_string()),
            ..Default::default()
        };

        let state = query.into_view_state().unwrap();
        assert_eq!(state.tab, Tab::Chemistry);
        assert_eq!(state.page, 2);
        assert_eq!(state.filters.search_term.as_deref(), Some("Ra"));
        assert_eq!(state.filters.score_range, Some(Range::new(100, 300)));
        assert_eq!(
            state.filters.subjects,
            Some(vec!["physics".to_string(), "maths".to_string()])
        );
        assert_eq!(
            state.sort,
            Some(SortSpec::new(SortField::Accuracy, SortDirection::Desc))
        );
    }

    #[test]
    fn rejects_out_of_range_values() {
        let query = LeaderboardQuery {
            page: Some(0),
            ..Default::default()
        };
        assert!(query.into_view_state().is_err());

        let query = LeaderboardQuery {
            score_min: Some(250),
            score_max: Some(100),
            ..Default::default()
        };
        assert!(query.into_view_state().is_err());

        let query = LeaderboardQuery {
            band: Some("legendary".to_string()),
            ..Default::default()
        };
        assert!(query.into_view_state().is_err());
    }
}
