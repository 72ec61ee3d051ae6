// src/view/analytics.rs

use crate::{
    models::{
        analytics::{AnalyticsData, ChartData, Dataset},
        entry::{CurrentUser, Entry},
    },
    view::subject::find_subject,
};

/// Participant count assumed when the server does not report one.
pub const DEFAULT_PARTICIPANTS: u32 = 1000;

/// Entries compared against the viewer in the top performers chart.
const COMPARISON_SIZE: usize = 5;

/// Subjects of the accuracy chart, with the title fragments that identify them.
const ACCURACY_SUBJECTS: [(&str, &[&str]); 3] = [
    ("Physics", &["physics"]),
    ("Chemistry", &["chemistry"]),
    ("Mathematics", &["mathematics", "math"]),
];

/// Builds every analytics chart. Without a viewer all charts are empty.
pub fn analytics(
    entries: &[Entry],
    viewer: Option<&CurrentUser>,
    total_participants: Option<u32>,
) -> AnalyticsData {
    let Some(viewer) = viewer else {
        return AnalyticsData::default();
    };

    AnalyticsData {
        subject_performance: subject_performance(viewer),
        rank_breakdown: rank_breakdown(viewer, total_participants.unwrap_or(DEFAULT_PARTICIPANTS)),
        accuracy_comparison: accuracy_comparison(entries, viewer),
        top_performers_comparison: top_performers_comparison(entries, viewer),
    }
}

/// The viewer's score in each of their subjects.
pub fn subject_performance(viewer: &CurrentUser) -> ChartData {
    ChartData {
        labels: viewer.subjects.iter().map(|s| s.subject.title.clone()).collect(),
        datasets: vec![Dataset {
            label: "Your Score".to_string(),
            data: viewer.subjects.iter().map(|s| f64::from(s.score)).collect(),
        }],
    }
}

/// Viewer's total against the first five entries of the page.
pub fn top_performers_comparison(entries: &[Entry], viewer: &CurrentUser) -> ChartData {
    let top = &entries[..entries.len().min(COMPARISON_SIZE)];

    let labels = std::iter::once("You".to_string())
        .chain(top.iter().map(|e| first_name(&e.user.name).to_string()))
        .collect();
    let data = std::iter::once(viewer.total_score)
        .chain(top.iter().map(|e| e.total_score))
        .map(f64::from)
        .collect();

    ChartData {
        labels,
        datasets: vec![Dataset {
            label: "Total Score".to_string(),
            data,
        }],
    }
}

/// Viewer's per-subject accuracy against the page average for that subject.
pub fn accuracy_comparison(entries: &[Entry], viewer: &CurrentUser) -> ChartData {
    let mut labels = Vec::with_capacity(ACCURACY_SUBJECTS.len());
    let mut yours = Vec::with_capacity(ACCURACY_SUBJECTS.len());
    let mut average = Vec::with_capacity(ACCURACY_SUBJECTS.len());

    for (label, fragments) in ACCURACY_SUBJECTS {
        labels.push(label.to_string());
        yours.push(accuracy_in(viewer, fragments).unwrap_or(0.0));

        let found: Vec<f64> = entries.iter().filter_map(|e| accuracy_in(e, fragments)).collect();
        average.push(if found.is_empty() {
            0.0
        } else {
            found.iter().sum::<f64>() / found.len() as f64
        });
    }

    ChartData {
        labels,
        datasets: vec![
            Dataset {
                label: "Your Accuracy".to_string(),
                data: yours,
            },
            Dataset {
                label: "Average Accuracy".to_string(),
                data: average,
            },
        ],
    }
}

/// How many participants rank below and above the viewer.
pub fn rank_breakdown(viewer: &CurrentUser, total_participants: u32) -> ChartData {
    let below = total_participants.saturating_sub(viewer.rank);
    let above = viewer.rank.saturating_sub(1);

    ChartData {
        labels: vec![
            "Students Below You".to_string(),
            "Students Above You".to_string(),
        ],
        datasets: vec![Dataset {
            label: "Students".to_string(),
            data: vec![f64::from(below), f64::from(above)],
        }],
    }
}

fn accuracy_in(entry: &Entry, fragments: &[&str]) -> Option<f64> {
    fragments
        .iter()
        .find_map(|f| find_subject(entry, f))
        .map(|s| s.accuracy)
}

fn first_name(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::test_support::{entry, ranked, with_accuracy};

    #[test]
    fn no_viewer_means_empty_charts() {
        let data = analytics(&ranked(5), None, Some(50));
        assert!(data.subject_performance.is_empty());
        assert!(data.rank_breakdown.is_empty());
        assert!(data.accuracy_comparison.is_empty());
        assert!(data.top_performers_comparison.is_empty());
    }

    #[test]
    fn compares_viewer_with_first_five() {
        let entries = ranked(8);
        let viewer = entries[6].clone();
        let chart = top_performers_comparison(&entries, &viewer);

        assert_eq!(chart.labels, vec!["You", "User", "User", "User", "User", "User"]);
        assert_eq!(chart.datasets[0].data.len(), 6);
        assert_eq!(chart.datasets[0].data[0], f64::from(viewer.total_score));
        assert_eq!(chart.datasets[0].data[1], f64::from(entries[0].total_score));
    }

    #[test]
    fn averages_only_entries_with_the_subject() {
        let viewer = with_accuracy(entry(4, "Viewer", &[("Physics", 60)]), "physics", 80.0);
        let entries = vec![
            with_accuracy(entry(1, "A", &[("Physics", 90)]), "physics", 90.0),
            with_accuracy(entry(2, "B", &[("Physics", 70)]), "physics", 70.0),
            with_accuracy(entry(3, "C", &[("Mathematics", 70)]), "math", 60.0),
        ];
        let chart = accuracy_comparison(&entries, &viewer);

        assert_eq!(chart.labels, vec!["Physics", "Chemistry", "Mathematics"]);
        assert_eq!(chart.datasets[0].data, vec![80.0, 0.0, 0.0]);
        assert_eq!(chart.datasets[1].data, vec![80.0, 0.0, 60.0]);
    }

    #[test]
    fn rank_breakdown_saturates() {
        let viewer = entry(56, "Viewer", &[]);
        assert_eq!(rank_breakdown(&viewer, 1000).datasets[0].data, vec![944.0, 55.0]);
        assert_eq!(rank_breakdown(&viewer, 10).datasets[0].data, vec![0.0, 55.0]);
    }

    #[test]
    fn subject_performance_follows_viewer_subjects() {
        let viewer = entry(3, "Viewer", &[("Physics", 65), ("Chemistry", 72)]);
        let chart = subject_performance(&viewer);
        assert_eq!(chart.labels, vec!["Physics", "Chemistry"]);
        assert_eq!(chart.datasets[0].data, vec![65.0, 72.0]);
    }
}
