//! API Error Types
//!
//! Error taxonomy for the data-access layer. A failure on either fetch
//! aborts initialization before any rendering happens; callers surface the
//! message through the global error signal.

use thiserror::Error;

/// Errors from fetching and decoding API resources
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request could not complete (network unreachable, CORS, ...)
    #[error("network error: {0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("server returned status {0}")]
    Status(u16),

    /// The response body is not well-formed JSON of the expected shape
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Result type for API operations
pub type FetchResult<T> = Result<T, FetchError>;
