//! HTTP request handlers for the quote API.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use common::{Deadline, ErrorPayload, Quote};
use std::sync::Arc;
use std::time::Duration;
use storage::RateStore;
use tracing::{error, info, warn};
use upstream::RateFetcher;

/// Shared state for quote handlers.
pub struct AppState {
    pub fetcher: RateFetcher,
    pub store: Arc<dyn RateStore>,
    /// Budget for the upstream fetch stage.
    pub fetch_timeout: Duration,
    /// Budget for the persistence stage.
    pub persist_timeout: Duration,
}

impl AppState {
    pub fn new(
        fetcher: RateFetcher,
        store: Arc<dyn RateStore>,
        fetch_timeout: Duration,
        persist_timeout: Duration,
    ) -> Self {
        Self {
            fetcher,
            store,
            fetch_timeout,
            persist_timeout,
        }
    }
}

/// GET /quote
///
/// Fetches the current rate, persists it, and returns `{"bid": "..."}`.
/// Both failure modes respond 408 with an [`ErrorPayload`]: a fetch
/// failure skips persistence entirely, and a persistence failure
/// downgrades an already-fetched quote to an error, since persisting is
/// part of serving it.
pub async fn get_quote(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Quote>, (StatusCode, Json<ErrorPayload>)> {
    // Stage 1: upstream fetch under its own deadline.
    let deadline = Deadline::after(state.fetch_timeout);
    let quote = state.fetcher.fetch(deadline).await.map_err(|e| {
        warn!(%e, "upstream fetch failed");
        (
            StatusCode::REQUEST_TIMEOUT,
            Json(ErrorPayload::with_details(
                "upstream rate fetch failed",
                e.to_string(),
            )),
        )
    })?;

    // Stage 2: persist under a fresh deadline, not the fetch remainder.
    let deadline = Deadline::after(state.persist_timeout);
    if let Err(e) = state.store.save(deadline, &quote).await {
        error!(%e, bid = %quote.bid, "failed to persist quote");
        return Err((
            StatusCode::REQUEST_TIMEOUT,
            Json(ErrorPayload::with_details(
                "failed to persist quote",
                e.to_string(),
            )),
        ));
    }

    info!(bid = %quote.bid, "quote served");
    Ok(Json(quote))
}
