//! DreamLoop Dashboard
//!
//! Dream journal analytics dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Summary cards for aggregate dream statistics
//! - Sentiment, lucidity, sleep-position and emotion charts
//! - Date-sorted journal table with content previews
//! - Tabbed navigation between chart and journal views
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It fetches `/api/dreams` and `/api/summary` fresh on each
//! page load and keeps everything in reactive signals; nothing is persisted
//! client-side.

use leptos::*;

mod api;
mod app;
mod charts;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
