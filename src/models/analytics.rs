// src/models/analytics.rs

use serde::Serialize;

/// One labelled series of a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
}

/// Chart-ready data: one label per point, one or more series.
/// Colors and styling are left to the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() && self.datasets.is_empty()
    }
}

/// The four charts of the analytics panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsData {
    pub subject_performance: ChartData,
    pub rank_breakdown: ChartData,
    pub accuracy_comparison: ChartData,
    pub top_performers_comparison: ChartData,
}
