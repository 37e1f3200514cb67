//! HTTP API Client
//!
//! Functions for communicating with the DreamLoop REST API. Both reads are
//! idempotent GETs; the dashboard fetches them fresh on every page load.

use gloo_net::http::Request;

use crate::api::error::{FetchError, FetchResult};
use crate::state::global::{DreamRecord, SummaryStats};

/// Default API base URL (same origin as the dashboard)
pub const DEFAULT_API_BASE: &str = "/api";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("dreamloop_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Fetch all dream records
pub async fn fetch_dreams() -> FetchResult<Vec<DreamRecord>> {
    let response = Request::get(&format!("{}/dreams", get_api_base()))
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// Fetch the summary statistics snapshot
pub async fn fetch_summary() -> FetchResult<SummaryStats> {
    let response = Request::get(&format!("{}/summary", get_api_base()))
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}
