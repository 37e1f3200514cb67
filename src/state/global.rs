//! Global Application State
//!
//! Reactive state management using Leptos signals, plus the data model for
//! the dream journal API.

use chrono::NaiveDate;
use leptos::*;
use std::collections::HashMap;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Dream records from the API; `None` until the initial fetch succeeds
    pub dreams: RwSignal<Option<Vec<DreamRecord>>>,
    /// Aggregate statistics from the API; `None` until the initial fetch succeeds
    pub summary: RwSignal<Option<SummaryStats>>,
    /// Currently visible dashboard tab
    pub active_tab: RwSignal<DashboardTab>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
}

/// One logged dream entry from the API
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DreamRecord {
    pub date: NaiveDate,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub mood: Option<String>,
    pub sentiment_score: f64,
    pub sentiment_magnitude: f64,
    pub lucidity_level: f64,
}

/// Aggregate statistics computed server-side over all dreams
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SummaryStats {
    pub total_dreams: u64,
    pub avg_sentiment: f64,
    pub avg_lucidity: f64,
    #[serde(default)]
    pub position_counts: HashMap<String, u64>,
    #[serde(default)]
    pub emotion_counts: HashMap<String, u64>,
}

impl SummaryStats {
    /// The most frequently logged sleep position, if any were logged.
    ///
    /// Ties break by label, ascending, so the result never depends on map
    /// iteration order.
    pub fn most_common_position(&self) -> Option<String> {
        ordered_counts(&self.position_counts)
            .into_iter()
            .next()
            .map(|(label, _)| label)
    }
}

/// Order a label-to-count mapping by count descending, ties by label
/// ascending.
///
/// Both the summary card and the chart builders go through this, so the
/// "most common position" always matches the first doughnut slice.
pub fn ordered_counts(counts: &HashMap<String, u64>) -> Vec<(String, u64)> {
    let mut entries: Vec<(String, u64)> =
        counts.iter().map(|(k, v)| (k.clone(), *v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
}

/// Dashboard tabs, shown one at a time
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardTab {
    #[default]
    Trends,
    Patterns,
    Journal,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] =
        [DashboardTab::Trends, DashboardTab::Patterns, DashboardTab::Journal];

    pub fn label(self) -> &'static str {
        match self {
            DashboardTab::Trends => "Trends",
            DashboardTab::Patterns => "Patterns",
            DashboardTab::Journal => "Journal",
        }
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        dreams: create_rw_signal(None),
        summary: create_rw_signal(None),
        active_tab: create_rw_signal(DashboardTab::default()),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, u64)]) -> HashMap<String, u64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn most_common_position_picks_max_count() {
        let summary = SummaryStats {
            position_counts: counts(&[("back", 3), ("side", 7), ("stomach", 1)]),
            ..Default::default()
        };
        assert_eq!(summary.most_common_position(), Some("side".to_string()));
    }

    #[test]
    fn most_common_position_tie_breaks_by_label() {
        // Equal counts must not depend on map iteration order
        let summary = SummaryStats {
            position_counts: counts(&[("side", 4), ("back", 4), ("stomach", 2)]),
            ..Default::default()
        };
        assert_eq!(summary.most_common_position(), Some("back".to_string()));
    }

    #[test]
    fn most_common_position_empty_is_none() {
        assert_eq!(SummaryStats::default().most_common_position(), None);
    }

    #[test]
    fn ordered_counts_sorts_desc_then_label() {
        let ordered = ordered_counts(&counts(&[
            ("fear", 2),
            ("joy", 5),
            ("anger", 2),
            ("calm", 1),
        ]));
        let labels: Vec<&str> = ordered.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, ["joy", "anger", "fear", "calm"]);
    }

    #[test]
    fn dream_record_decodes_api_shape() {
        let record: DreamRecord = serde_json::from_value(serde_json::json!({
            "date": "2024-03-05",
            "title": "Flying over water",
            "content": "I was gliding above a wide bay...",
            "mood": "peaceful",
            "sentiment_score": 0.8,
            "sentiment_magnitude": 1.2,
            "lucidity_level": 0.6,
        }))
        .unwrap();

        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(record.mood.as_deref(), Some("peaceful"));
    }

    #[test]
    fn summary_decodes_with_missing_counts() {
        // Older API builds omit the count maps entirely
        let summary: SummaryStats = serde_json::from_value(serde_json::json!({
            "total_dreams": 12,
            "avg_sentiment": 0.25,
            "avg_lucidity": 0.4,
        }))
        .unwrap();

        assert_eq!(summary.total_dreams, 12);
        assert!(summary.position_counts.is_empty());
    }
}
