// src/models/filter.rs

use serde::{Deserialize, Serialize};

/// Inclusive `[min, max]` bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> Range<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }
}

pub type ScoreRange = Range<i32>;
pub type AccuracyRange = Range<f64>;

impl ScoreRange {
    /// Preset bands offered by the filter menu.
    pub const BEGINNER: ScoreRange = Range { min: 0, max: 100 };
    pub const INTERMEDIATE: ScoreRange = Range { min: 101, max: 200 };
    pub const ADVANCED: ScoreRange = Range { min: 201, max: 300 };

    /// Looks up a preset band by its menu name, case-insensitively.
    pub fn preset(name: &str) -> Option<ScoreRange> {
        match name.trim().to_lowercase().as_str() {
            "beginner" => Some(Self::BEGINNER),
            "intermediate" => Some(Self::INTERMEDIATE),
            "advanced" => Some(Self::ADVANCED),
            _ => None,
        }
    }
}

/// Optional predicate bundle applied to a page of entries.
///
/// Every present predicate must hold (AND). `subjects` is satisfied when any
/// listed subject is a strength of the entry (OR).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_range: Option<ScoreRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy_range: Option<AccuracyRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subjects: Option<Vec<String>>,
}

impl FilterCriteria {
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    pub fn with_score_range(mut self, min: i32, max: i32) -> Self {
        self.score_range = Some(Range::new(min, max));
        self
    }

    pub fn with_accuracy_range(mut self, min: f64, max: f64) -> Self {
        self.accuracy_range = Some(Range::new(min, max));
        self
    }

    pub fn with_subjects<I, S>(mut self, subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subjects = Some(subjects.into_iter().map(Into::into).collect());
        self
    }

    /// The search term after trimming and lowercasing, if it constrains anything.
    pub fn normalized_search(&self) -> Option<String> {
        self.search_term
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
    }

    /// Subject fragments, if any were selected.
    pub fn selected_subjects(&self) -> Option<&[String]> {
        self.subjects.as_deref().filter(|s| !s.is_empty())
    }

    /// True when at least one predicate would narrow the set.
    pub fn is_active(&self) -> bool {
        self.active_count() > 0
    }

    /// Number of predicates that currently constrain the set.
    pub fn active_count(&self) -> usize {
        [
            self.normalized_search().is_some(),
            self.score_range.is_some(),
            self.accuracy_range.is_some(),
            self.selected_subjects().is_some(),
        ]
        .iter()
        .filter(|&&active| active)
        .count()
    }
}
