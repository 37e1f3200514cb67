//! Navigation Component
//!
//! Header bar with the DreamLoop brand.

use leptos::*;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <div class="flex items-center space-x-3">
                        <span class="text-2xl">"🌙"</span>
                        <span class="text-xl font-bold text-white">"DreamLoop"</span>
                    </div>
                    <span class="text-sm text-gray-400">"Dream journal analytics"</span>
                </div>
            </div>
        </nav>
    }
}
