//! Client error types

use common::ErrorPayload;
use std::io;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("overall deadline elapsed before the request was issued")]
    DeadlineExceeded,

    #[error("rate service returned an error: {0}")]
    Remote(ErrorPayload),

    #[error("request to rate service failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("failed to write quote file: {0}")]
    LocalIo(#[from] io::Error),
}
