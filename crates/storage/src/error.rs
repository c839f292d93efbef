//! Storage error types

use thiserror::Error;

/// Result type alias for storage operations
pub type Result<T> = std::result::Result<T, PersistenceError>;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("persistence deadline elapsed before the write was attempted")]
    DeadlineExceeded,

    #[error("failed to open database: {0}")]
    Connection(String),

    #[error("query failed: {0}")]
    Query(String),
}

impl From<sqlx::Error> for PersistenceError {
    fn from(err: sqlx::Error) -> Self {
        PersistenceError::Query(err.to_string())
    }
}
