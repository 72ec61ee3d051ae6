// src/models/view_state.rs

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::AppError, models::filter::FilterCriteria};

/// Leaderboard view selected by the tab bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tab {
    #[default]
    Overall,
    Physics,
    Chemistry,
    Maths,
    TopPerformers,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Overall,
        Tab::Physics,
        Tab::Chemistry,
        Tab::Maths,
        Tab::TopPerformers,
    ];

    /// Title fragment used to find this tab's subject. `None` for non-subject tabs.
    pub fn subject_fragment(self) -> Option<&'static str> {
        match self {
            Tab::Physics => Some("physics"),
            Tab::Chemistry => Some("chemistry"),
            Tab::Maths => Some("math"),
            Tab::Overall | Tab::TopPerformers => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Overall => "overall",
            Tab::Physics => "physics",
            Tab::Chemistry => "chemistry",
            Tab::Maths => "maths",
            Tab::TopPerformers => "topPerformers",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::BadRequest(format!("Unknown tab '{}'", s)))
    }
}

/// Column a table can be sorted by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "subject")]
pub enum SortField {
    Rank,
    /// Case-folded name order. This is not locale-aware collation: accented
    /// and non-Latin names order by code point after lowercasing.
    Name,
    TotalScore,
    Accuracy,
    /// Score in the first subject whose title contains the fragment.
    Subject(String),
}

impl FromStr for SortField {
    type Err = AppError;

    /// Accepts `rank`, `name`, `totalScore`, `accuracy` or `subject:<fragment>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(fragment) = s.strip_prefix("subject:") {
            let fragment = fragment.trim();
            if fragment.is_empty() {
                return Err(AppError::BadRequest("Subject sort needs a subject name".to_string()));
            }
            return Ok(SortField::Subject(fragment.to_string()));
        }

        match s.to_ascii_lowercase().as_str() {
            "rank" => Ok(SortField::Rank),
            "name" => Ok(SortField::Name),
            "totalscore" | "total_score" | "score" => Ok(SortField::TotalScore),
            "accuracy" => Ok(SortField::Accuracy),
            _ => Err(AppError::BadRequest(format!("Unknown sort field '{}'", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            _ => Err(AppError::BadRequest(format!("Unknown sort direction '{}'", s))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }
}

/// Everything the composer needs to know about what the viewer asked for.
/// `sort: None` is the unsorted state: rows keep the order they arrive in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub tab: Tab,
    pub page: u32,
    pub sort: Option<SortSpec>,
    pub filters: FilterCriteria,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            tab: Tab::Overall,
            page: 1,
            sort: None,
            filters: FilterCriteria::default(),
        }
    }
}

/// State transitions triggered by the leaderboard controls.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewAction {
    SelectTab(Tab),
    SetFilters(FilterCriteria),
    ClearFilters,
    GoToPage(u32),
    /// Column-header click: asc -> desc -> unsorted.
    ToggleSort(SortField),
    SetSort(Option<SortSpec>),
}

impl ViewState {
    pub fn apply(self, action: ViewAction) -> ViewState {
        match action {
            ViewAction::SelectTab(tab) => ViewState {
                tab,
                page: 1,
                filters: FilterCriteria::default(),
                ..self
            },
            ViewAction::SetFilters(filters) => ViewState {
                filters,
                page: 1,
                ..self
            },
            ViewAction::ClearFilters => ViewState {
                filters: FilterCriteria::default(),
                page: 1,
                ..self
            },
            ViewAction::GoToPage(page) => ViewState {
                page: page.max(1),
                ..self
            },
            ViewAction::ToggleSort(field) => {
                let sort = match self.sort {
                    Some(ref current) if current.field == field => match current.direction {
                        SortDirection::Asc => Some(SortSpec::new(field, SortDirection::Desc)),
                        SortDirection::Desc => None,
                    },
                    _ => Some(SortSpec::new(field, SortDirection::Asc)),
                };
                ViewState { sort, ..self }
            }
            ViewAction::SetSort(sort) => ViewState { sort, ..self },
        }
    }

    /// Whether the first page carves out the top three for the podium.
    pub fn uses_podium_convention(&self) -> bool {
        self.tab == Tab::Overall && !self.filters.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_change_resets_page_and_filters() {
        let state = ViewState::default()
            .apply(ViewAction::SetFilters(FilterCriteria::default().with_search("ra")))
            .apply(ViewAction::GoToPage(4))
            .apply(ViewAction::SetSort(Some(SortSpec::new(SortField::Name, SortDirection::Desc))))
            .apply(ViewAction::SelectTab(Tab::Physics));

        assert_eq!(state.tab, Tab::Physics);
        assert_eq!(state.page, 1);
        assert_eq!(state.filters, FilterCriteria::default());
        assert!(state.sort.is_some());
    }

    #[test]
    fn filter_change_resets_page() {
        let state = ViewState::default()
            .apply(ViewAction::GoToPage(3))
            .apply(ViewAction::SetFilters(FilterCriteria::default().with_score_range(0, 100)));
        assert_eq!(state.page, 1);
        assert!(!state.uses_podium_convention());
    }

    #[test]
    fn clear_filters_resets_page_and_keeps_tab_and_sort() {
        let sort = Some(SortSpec::new(SortField::TotalScore, SortDirection::Desc));
        let state = ViewState::default()
            .apply(ViewAction::SelectTab(Tab::Chemistry))
            .apply(ViewAction::SetFilters(
                FilterCriteria::default().with_search("ra").with_accuracy_range(50.0, 90.0),
            ))
            .apply(ViewAction::SetSort(sort.clone()))
            .apply(ViewAction::GoToPage(3))
            .apply(ViewAction::ClearFilters);

        assert_eq!(state.filters, FilterCriteria::default());
        assert_eq!(state.page, 1);
        assert_eq!(state.tab, Tab::Chemistry);
        assert_eq!(state.sort, sort);
    }

    #[test]
    fn page_zero_clamps_to_one() {
        let state = ViewState::default().apply(ViewAction::GoToPage(0));
        assert_eq!(state.page, 1);
    }

    #[test]
    fn sort_toggle_cycles_through_unsorted() {
        let asc = ViewState::default().apply(ViewAction::ToggleSort(SortField::Accuracy));
        assert_eq!(asc.sort, Some(SortSpec::new(SortField::Accuracy, SortDirection::Asc)));

        let desc = asc.apply(ViewAction::ToggleSort(SortField::Accuracy));
        assert_eq!(desc.sort, Some(SortSpec::new(SortField::Accuracy, SortDirection::Desc)));

        let unsorted = desc.clone().apply(ViewAction::ToggleSort(SortField::Accuracy));
        assert_eq!(unsorted.sort, None);

        // A different column restarts the cycle.
        let other = desc.apply(ViewAction::ToggleSort(SortField::Name));
        assert_eq!(other.sort, Some(SortSpec::new(SortField::Name, SortDirection::Asc)));
    }

    #[test]
    fn parses_query_values() {
        assert_eq!("topPerformers".parse::<Tab>().unwrap(), Tab::TopPerformers);
        assert_eq!("MATHS".parse::<Tab>().unwrap(), Tab::Maths);
        assert!("biology".parse::<Tab>().is_err());

        assert_eq!("totalScore".parse::<SortField>().unwrap(), SortField::TotalScore);
        assert_eq!(
            "subject:Physics".parse::<SortField>().unwrap(),
            SortField::Subject("Physics".to_string())
        );
        assert!("subject:".parse::<SortField>().is_err());
        assert_eq!("desc".parse::<SortDirection>().unwrap(), SortDirection::Desc);
    }
}
