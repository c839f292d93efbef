//! SQLite implementation of the rate store.

use async_trait::async_trait;
use chrono::Utc;
use common::{Deadline, Quote};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{PersistenceError, Result};

/// Default on-disk database, created next to the service binary.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://cambio.db?mode=rwc";

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS cambio (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    cotacao TEXT,
    timestamp DATETIME DEFAULT CURRENT_TIMESTAMP
)
"#;

/// Storage seam the service depends on.
#[async_trait]
pub trait RateStore: Send + Sync + 'static {
    /// Persist one quote with the current timestamp.
    ///
    /// The deadline is checked non-blockingly before the write: if it has
    /// already elapsed the store fails immediately without touching the
    /// database. A failed save never rolls back or retries.
    async fn save(&self, deadline: Deadline, quote: &Quote) -> Result<()>;
}

/// SQLite-backed rate store.
///
/// Wraps a connection pool opened once at startup and shared across
/// requests; write serialization is delegated to SQLite.
#[derive(Debug, Clone)]
pub struct SqliteRateStore {
    pool: SqlitePool,
}

impl SqliteRateStore {
    /// Open a pool against the given database URL.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .map_err(|e| PersistenceError::Connection(e.to_string()))?;

        info!(url = database_url, "connected to SQLite");
        Ok(Self { pool })
    }

    /// Wrap an existing pool.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the `cambio` table if it does not exist.
    ///
    /// Idempotent; called once at process start.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        info!("cambio table ready");
        Ok(())
    }

    /// Number of stored quotes.
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cambio")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[async_trait]
impl RateStore for SqliteRateStore {
    async fn save(&self, deadline: Deadline, quote: &Quote) -> Result<()> {
        if deadline.is_elapsed() {
            return Err(PersistenceError::DeadlineExceeded);
        }

        sqlx::query("INSERT INTO cambio (cotacao, timestamp) VALUES (?, ?)")
            .bind(&quote.bid)
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;

        debug!(bid = %quote.bid, "quote persisted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    // Single connection so the in-memory database is shared.
    async fn memory_store() -> SqliteRateStore {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        SqliteRateStore::from_pool(pool)
    }

    #[tokio::test]
    async fn ensure_schema_is_idempotent() {
        let store = memory_store().await;
        store.ensure_schema().await.unwrap();
        store.ensure_schema().await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn save_appends_one_row() {
        let store = memory_store().await;
        store.ensure_schema().await.unwrap();

        let quote = Quote::new("5.4312");
        store
            .save(Deadline::after(Duration::from_secs(1)), &quote)
            .await
            .unwrap();

        assert_eq!(store.count().await.unwrap(), 1);

        let stored: String = sqlx::query_scalar("SELECT cotacao FROM cambio")
            .fetch_one(store.pool())
            .await
            .unwrap();
        assert_eq!(stored, "5.4312");
    }

    #[tokio::test]
    async fn save_fails_fast_on_elapsed_deadline() {
        let store = memory_store().await;
        store.ensure_schema().await.unwrap();

        let result = store
            .save(Deadline::after(Duration::ZERO), &Quote::new("5.43"))
            .await;
        assert!(matches!(result, Err(PersistenceError::DeadlineExceeded)));

        // Nothing was written.
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn save_reports_query_failure_when_table_is_missing() {
        let store = memory_store().await;
        // No ensure_schema: the insert has no table to land in.
        let result = store
            .save(Deadline::after(Duration::from_secs(1)), &Quote::new("5.43"))
            .await;
        assert!(matches!(result, Err(PersistenceError::Query(_))));
    }
}
