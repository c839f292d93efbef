//! Cambio rate client
//!
//! Fixed-behavior executable: calls the rate service at
//! `http://localhost:8080/quote` under one overall deadline and writes
//! the bid to `cotacao.txt`. A service-side error means no file is
//! written; a file-write failure is reported but does not fail the
//! invocation beyond the diagnostic.

use anyhow::Result;
use client::{write_quote, QuoteClient, DEFAULT_BASE_URL, OUTPUT_FILE};
use common::Deadline;
use observability::{init_logging, LogFormat};
use std::path::Path;
use std::time::Duration;
use tracing::{error, info};

/// Overall budget for the single service call.
const OVERALL_TIMEOUT: Duration = Duration::from_secs(300);

#[tokio::main]
async fn main() -> Result<()> {
    init_logging("cotacao", LogFormat::Pretty)?;

    let quote_client = QuoteClient::new(DEFAULT_BASE_URL)?;

    let bid = match quote_client
        .fetch_quote(Deadline::after(OVERALL_TIMEOUT))
        .await
    {
        Ok(bid) => bid,
        Err(e) => {
            error!(%e, "failed to fetch the exchange rate");
            return Ok(());
        }
    };

    if let Err(e) = write_quote(Path::new(OUTPUT_FILE), &bid) {
        error!(%e, "failed to write the quote file");
        return Ok(());
    }

    info!(bid = %bid, file = OUTPUT_FILE, "exchange rate saved");
    Ok(())
}
