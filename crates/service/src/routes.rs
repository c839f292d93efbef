//! Axum route definitions for the quote API.

use crate::handlers::{self, AppState};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

/// Create the quote routes.
///
/// # Routes
///
/// - `GET /quote` - Fetch, persist, and return the current rate
pub fn quote_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/quote", get(handlers::get_quote))
        .with_state(state)
}
