//! Tab Navigation
//!
//! Mutually exclusive dashboard panels with a matching button row. State
//! is a single `active_tab` signal; clicking a button is last-write-wins
//! with no history or guards.

use leptos::*;

use crate::state::global::{DashboardTab, GlobalState};

/// Display value for a panel given the active tab
pub fn panel_display(active: DashboardTab, panel: DashboardTab) -> &'static str {
    if active == panel {
        "block"
    } else {
        "none"
    }
}

/// Button styling for active/inactive tabs
pub fn tab_button_class(is_active: bool) -> String {
    let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
    if is_active {
        format!("{} bg-purple-700 text-white", base)
    } else {
        format!("{} bg-gray-700 text-gray-300 hover:bg-gray-600", base)
    }
}

/// Row of tab buttons
#[component]
pub fn TabBar() -> impl IntoView {
    view! {
        <div class="flex space-x-2">
            {DashboardTab::ALL
                .into_iter()
                .map(|tab| view! { <TabButton tab=tab /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn TabButton(tab: DashboardTab) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_memo = state.clone();
    let is_active = create_memo(move |_| state_for_memo.active_tab.get() == tab);

    let state_for_click = state;
    let on_click = move |_| state_for_click.active_tab.set(tab);

    view! {
        <button on:click=on_click class=move || tab_button_class(is_active.get())>
            {tab.label()}
        </button>
    }
}

/// One mutually exclusive content panel
#[component]
pub fn TabPanel(tab: DashboardTab, children: Children) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div style:display=move || panel_display(state.active_tab.get(), tab)>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_a_tab_shows_exactly_its_panel() {
        // Trends starts active; after clicking Journal only its panel shows
        let active = DashboardTab::Journal;
        let visible: Vec<DashboardTab> = DashboardTab::ALL
            .into_iter()
            .filter(|panel| panel_display(active, *panel) == "block")
            .collect();

        assert_eq!(visible, [DashboardTab::Journal]);
    }

    #[test]
    fn only_the_active_button_is_highlighted() {
        let active = DashboardTab::Journal;
        for tab in DashboardTab::ALL {
            let class = tab_button_class(active == tab);
            assert_eq!(class.contains("bg-purple-700"), tab == DashboardTab::Journal);
        }
    }

    #[test]
    fn trends_is_the_initial_tab() {
        assert_eq!(DashboardTab::default(), DashboardTab::Trends);
    }
}
