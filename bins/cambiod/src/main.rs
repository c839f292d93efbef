//! Cambio rate service daemon
//!
//! Fixed-behavior executable: listens on port 8080, fetches USD-BRL from
//! the external FX API, persists quotes to `cambio.db`. Startup failures
//! (database unreachable, bind failure) abort here at the top level;
//! request handling never terminates the process.

use anyhow::{Context, Result};
use observability::{init_logging, LogFormat};
use service::{AppState, QuoteServer, ServiceConfig};
use std::sync::Arc;
use storage::SqliteRateStore;
use tracing::info;
use upstream::RateFetcher;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging("cambiod", LogFormat::Pretty)?;

    let config = ServiceConfig::default();
    info!(port = config.port, upstream = %config.upstream_url, "cambiod starting");

    let store = SqliteRateStore::connect(&config.database_url)
        .await
        .context("failed to open the quote database")?;
    store
        .ensure_schema()
        .await
        .context("failed to create the cambio table")?;

    let fetcher =
        RateFetcher::new(config.upstream_url.as_str()).context("failed to build the upstream client")?;

    let state = Arc::new(AppState::new(
        fetcher,
        Arc::new(store),
        config.fetch_timeout,
        config.persist_timeout,
    ));

    let server = QuoteServer::new(config, state);
    server.run_with_ctrl_c().await?;

    Ok(())
}
