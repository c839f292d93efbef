//! Upstream fetcher error types

use thiserror::Error;

/// Result type alias for upstream operations
pub type Result<T> = std::result::Result<T, UpstreamError>;

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("deadline elapsed before the upstream request was issued")]
    DeadlineExceeded,

    #[error("upstream request timed out")]
    Timeout,

    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("failed to decode upstream response: {0}")]
    Decode(String),
}

impl UpstreamError {
    /// Map a reqwest error, distinguishing timeouts from other transport
    /// failures.
    pub(crate) fn from_request(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Request(err)
        }
    }
}
