//! Dashboard Page
//!
//! The single page of the app: summary cards, tabbed chart panels and the
//! journal table. Data loads once per page view.

use leptos::*;

use crate::api;
use crate::charts::{self, ChartSpec};
use crate::components::{
    CanvasChart, CardSkeleton, ChartSkeleton, DreamTable, Loading, SummaryCards, TabBar, TabPanel,
};
use crate::state::global::{DashboardTab, GlobalState};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Fetch dreams and summary concurrently on mount. The render is gated
    // on the joined result: if either fetch fails, no chart or table data
    // is set and the page stays in its skeleton state.
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);

            match futures_util::try_join!(api::fetch_dreams(), api::fetch_summary()) {
                Ok((dreams, summary)) => {
                    state.dreams.set(Some(dreams));
                    state.summary.set(Some(summary));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to load dashboard: {}", e).into());
                    state.show_error(&e.to_string());
                }
            }

            state.loading.set(false);
        });
    });

    let dreams = state.dreams;
    let summary = state.summary;

    let sentiment_spec = create_memo(move |_| {
        dreams.get().map(|d| charts::sentiment_chart(&d))
    });
    let lucidity_spec = create_memo(move |_| {
        dreams.get().map(|d| charts::lucidity_chart(&d))
    });
    let position_spec = create_memo(move |_| {
        summary.get().map(|s| charts::position_chart(&s.position_counts))
    });
    let emotion_spec = create_memo(move |_| {
        summary.get().map(|s| charts::emotion_chart(&s.emotion_counts))
    });

    let error = state.error;

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Your dream patterns at a glance"</p>
            </div>

            // Fetch failure banner; the skeletons below stay in place
            {move || {
                error.get().map(|msg| view! {
                    <div class="bg-red-900 border border-red-700 text-red-200 rounded-lg px-4 py-3 text-sm">
                        {format!("Could not load dream data: {}", msg)}
                    </div>
                })
            }}

            // Summary cards
            <section>
                {move || {
                    if summary.get().is_some() {
                        view! { <SummaryCards /> }.into_view()
                    } else {
                        view! {
                            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                                <CardSkeleton />
                                <CardSkeleton />
                                <CardSkeleton />
                                <CardSkeleton />
                            </div>
                        }.into_view()
                    }
                }}
            </section>

            // Tabbed chart and journal panels
            <TabBar />

            <TabPanel tab=DashboardTab::Trends>
                <div class="space-y-8">
                    <ChartCard title="Sentiment Over Time" spec=sentiment_spec />
                    <ChartCard title="Lucidity Levels" spec=lucidity_spec />
                </div>
            </TabPanel>

            <TabPanel tab=DashboardTab::Patterns>
                <div class="grid md:grid-cols-2 gap-8">
                    <ChartCard title="Sleep Positions" spec=position_spec />
                    <ChartCard title="Emotions" spec=emotion_spec />
                </div>
            </TabPanel>

            <TabPanel tab=DashboardTab::Journal>
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Dream Journal"</h2>
                    {move || {
                        if dreams.get().is_some() {
                            view! { <DreamTable /> }.into_view()
                        } else {
                            view! { <Loading /> }.into_view()
                        }
                    }}
                </section>
            </TabPanel>
        </div>
    }
}

/// Chart section with a skeleton while data is missing
#[component]
fn ChartCard(
    title: &'static str,
    #[prop(into)] spec: Signal<Option<ChartSpec>>,
) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">{title}</h2>
            {move || {
                if spec.get().is_some() {
                    view! { <CanvasChart spec=spec /> }.into_view()
                } else {
                    view! { <ChartSkeleton /> }.into_view()
                }
            }}
        </section>
    }
}
