//! Summary Cards
//!
//! Four stat cards derived from the summary snapshot: total dreams,
//! average sentiment, average lucidity, most common sleep position.

use leptos::*;

use crate::state::global::GlobalState;

/// Grid of summary stat cards
#[component]
pub fn SummaryCards() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let summary = state.summary;

    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            <StatCard
                label="Total Dreams"
                value=Signal::derive(move || {
                    summary.get().map(|s| s.total_dreams.to_string())
                })
            />
            <StatCard
                label="Avg Sentiment"
                value=Signal::derive(move || {
                    summary.get().map(|s| format!("{:.2}", s.avg_sentiment))
                })
            />
            <StatCard
                label="Avg Lucidity"
                value=Signal::derive(move || {
                    summary.get().map(|s| format!("{:.2}", s.avg_lucidity))
                })
            />
            <StatCard
                label="Common Position"
                value=Signal::derive(move || {
                    summary.get().and_then(|s| s.most_common_position())
                })
            />
        </div>
    }
}

/// Single stat display card
#[component]
fn StatCard(
    label: &'static str,
    #[prop(into)] value: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-gray-600 transition">
            <span class="text-gray-400 text-sm">{label}</span>
            <div class="text-3xl font-bold mt-2 capitalize">
                {move || value.get().unwrap_or_else(|| "—".to_string())}
            </div>
        </div>
    }
}
