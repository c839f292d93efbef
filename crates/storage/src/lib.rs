//! Rate persistence for cambio
//!
//! The store owns the append-only `cambio` table: one row per
//! successfully served quote, never updated or deleted. Schema creation
//! is idempotent and happens once at process start, never from request
//! handling.
//!
//! The [`RateStore`] trait is the seam the service depends on;
//! [`SqliteRateStore`] is the SQLite implementation over a `sqlx` pool.

pub mod error;
pub mod sqlite;

pub use error::{PersistenceError, Result};
pub use sqlite::{RateStore, SqliteRateStore, DEFAULT_DATABASE_URL};
