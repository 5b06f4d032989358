//! Unified error types.

use thiserror::Error;

/// Top-level crate error.
///
/// Transport failures and malformed response bodies are distinct variants:
/// decoding happens as a separate step after a successful fetch, so a caller
/// can always tell a failed request from a response of the wrong shape. A
/// missing conversion rate is deliberately *not* represented here — the
/// converter degrades to an empty derived amount instead (see
/// `domain::converter`).
#[derive(Error, Debug)]
pub enum CoreError {
    #[cfg(feature = "http")]
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Malformed response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown chart asset: {0}")]
    UnknownAsset(String),

    #[error("History store not configured")]
    HistoryNotConfigured,
}

/// HTTP-layer errors. Any of these is a fetch failure from the caller's
/// point of view; the variants preserve the response class for logging.
#[cfg(feature = "http")]
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Timeout")]
    Timeout,
}
