//! Dream Journal Table
//!
//! Renders every dream record as one table row, newest first. Row models
//! are built as plain data so the ordering, truncation and badge rules are
//! testable without a DOM; the view is a full replacement of the table
//! body on every change.

use leptos::*;

use crate::state::global::{DreamRecord, GlobalState};

/// Characters of dream content shown in the preview column
pub const PREVIEW_CHARS: usize = 50;

const BADGE_POSITIVE: &str = "bg-green-100 text-green-800";
const BADGE_NEGATIVE: &str = "bg-red-100 text-red-800";

/// One rendered table row
#[derive(Clone, Debug, PartialEq)]
pub struct DreamRow {
    pub date: String,
    pub title: String,
    pub preview: String,
    pub mood: String,
    pub score: String,
    pub badge: &'static str,
    pub lucidity: String,
}

/// Badge style for a sentiment score. Zero is not positive.
pub fn badge_class(score: f64) -> &'static str {
    if score > 0.0 {
        BADGE_POSITIVE
    } else {
        BADGE_NEGATIVE
    }
}

/// First `PREVIEW_CHARS` characters of the content, ellipsized only when
/// something was actually cut. Not word-boundary aware.
pub fn content_preview(content: &str) -> String {
    let mut preview: String = content.chars().take(PREVIEW_CHARS).collect();
    if content.chars().count() > PREVIEW_CHARS {
        preview.push_str("...");
    }
    preview
}

/// Project records into display rows, newest date first.
///
/// The sort is stable, so records sharing a date keep their API order.
pub fn build_rows(dreams: &[DreamRecord]) -> Vec<DreamRow> {
    let mut sorted = dreams.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    sorted
        .iter()
        .map(|dream| DreamRow {
            date: dream.date.to_string(),
            title: dream.title.clone(),
            preview: content_preview(&dream.content),
            mood: dream.mood.clone().unwrap_or_else(|| "—".to_string()),
            score: format!("{:.2}", dream.sentiment_score),
            badge: badge_class(dream.sentiment_score),
            lucidity: format!("{:.2}", dream.lucidity_level),
        })
        .collect()
}

/// Journal table component
#[component]
pub fn DreamTable() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let rows = create_memo(move |_| {
        state
            .dreams
            .get()
            .map(|dreams| build_rows(&dreams))
            .unwrap_or_default()
    });

    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-gray-700">
                <thead>
                    <tr class="text-left text-xs font-medium text-gray-400 uppercase tracking-wider">
                        <th class="px-6 py-3">"Date"</th>
                        <th class="px-6 py-3">"Dream"</th>
                        <th class="px-6 py-3">"Mood"</th>
                        <th class="px-6 py-3">"Sentiment"</th>
                        <th class="px-6 py-3">"Lucidity"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-700">
                    {move || {
                        let rows = rows.get();
                        if rows.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="5" class="px-6 py-8 text-center text-sm text-gray-400">
                                        "No dreams logged yet"
                                    </td>
                                </tr>
                            }.into_view()
                        } else {
                            rows.into_iter().map(|row| view! {
                                <tr class="hover:bg-gray-750">
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-400">
                                        {row.date}
                                    </td>
                                    <td class="px-6 py-4 whitespace-nowrap">
                                        <div class="text-sm font-medium text-white">{row.title}</div>
                                        <div class="text-sm text-gray-400">{row.preview}</div>
                                    </td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-400 capitalize">
                                        {row.mood}
                                    </td>
                                    <td class="px-6 py-4 whitespace-nowrap">
                                        <span class=format!(
                                            "px-2 inline-flex text-xs leading-5 font-semibold rounded-full {}",
                                            row.badge
                                        )>
                                            {row.score}
                                        </span>
                                    </td>
                                    <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-400">
                                        {row.lucidity}
                                    </td>
                                </tr>
                            }).collect_view()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dream(date: &str, title: &str, content: &str, score: f64) -> DreamRecord {
        DreamRecord {
            date: date.parse().unwrap(),
            title: title.to_string(),
            content: content.to_string(),
            mood: Some("calm".to_string()),
            sentiment_score: score,
            sentiment_magnitude: 0.5,
            lucidity_level: 0.5,
        }
    }

    #[test]
    fn rows_sort_by_date_descending() {
        let dreams = vec![
            dream("2024-01-01", "a", "x", 0.1),
            dream("2024-03-05", "b", "x", 0.1),
            dream("2024-02-10", "c", "x", 0.1),
        ];
        let rows = build_rows(&dreams);
        let dates: Vec<&str> = rows.iter().map(|r| r.date.as_str()).collect();

        assert_eq!(dates, ["2024-03-05", "2024-02-10", "2024-01-01"]);
    }

    #[test]
    fn equal_dates_keep_api_order() {
        let dreams = vec![
            dream("2024-02-10", "first", "x", 0.1),
            dream("2024-02-10", "second", "x", 0.1),
            dream("2024-03-05", "newest", "x", 0.1),
        ];
        let rows = build_rows(&dreams);
        let titles: Vec<&str> = rows.iter().map(|r| r.title.as_str()).collect();

        assert_eq!(titles, ["newest", "first", "second"]);
    }

    #[test]
    fn row_building_is_idempotent() {
        let dreams = vec![
            dream("2024-01-01", "a", "x", 0.1),
            dream("2024-03-05", "b", "x", -0.4),
        ];
        assert_eq!(build_rows(&dreams), build_rows(&dreams));
    }

    #[test]
    fn zero_score_gets_the_negative_badge() {
        assert_eq!(badge_class(0.0), BADGE_NEGATIVE);
        assert_eq!(badge_class(-0.3), BADGE_NEGATIVE);
        assert_eq!(badge_class(0.01), BADGE_POSITIVE);
    }

    #[test]
    fn preview_cuts_at_fifty_characters() {
        let long = "a".repeat(60);
        let preview = content_preview(&long);

        assert_eq!(preview.chars().count(), 53);
        assert!(preview.starts_with(&"a".repeat(50)));
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn short_content_is_untouched() {
        let exactly_fifty = "b".repeat(50);
        assert_eq!(content_preview(&exactly_fifty), exactly_fifty);
        assert_eq!(content_preview("brief"), "brief");
    }

    #[test]
    fn preview_counts_characters_not_bytes() {
        let content = "é".repeat(60);
        let preview = content_preview(&content);

        assert_eq!(preview.chars().count(), 53);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn missing_mood_renders_placeholder() {
        let mut record = dream("2024-01-01", "a", "x", 0.1);
        record.mood = None;
        let rows = build_rows(&[record]);

        assert_eq!(rows[0].mood, "—");
    }
}
