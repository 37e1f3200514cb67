//! API Layer
//!
//! HTTP client and error types for the DreamLoop REST API.

pub mod client;
pub mod error;

pub use client::{fetch_dreams, fetch_summary, get_api_base};
pub use error::{FetchError, FetchResult};
