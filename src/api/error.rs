//! API error types for the filter client.

use thiserror::Error;

/// Errors that can occur when interacting with the Jira API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Jira answered with an HTTP status above 300.
    ///
    /// The message is the raw response body text. The status code and any
    /// structured Jira error fields are not preserved; the host contract
    /// expects only a human-readable message (a known limitation, kept for
    /// compatibility).
    #[error("{0}")]
    RequestFailed(String),

    /// Network or HTTP transport error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The configured credentials cannot form an `Authorization` header.
    ///
    /// Not reachable through [`Auth::new`](crate::api::Auth::new) today:
    /// the credential pair is Base64-encoded before header construction,
    /// and that output is always a valid header value. The variant keeps
    /// construction total over arbitrary header inputs.
    #[error("Invalid authorization header: {0}")]
    InvalidAuthHeader(#[from] reqwest::header::InvalidHeaderValue),
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
