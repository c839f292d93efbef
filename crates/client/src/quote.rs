//! HTTP client for the rate service.

use common::{Deadline, ErrorPayload, Quote};
use reqwest::StatusCode;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Base URL of the rate service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// File the fetched bid is written to.
pub const OUTPUT_FILE: &str = "cotacao.txt";

/// Client for the rate service's quote endpoint.
///
/// Holds a shared `reqwest::Client`; the per-call deadline bounds the
/// whole request.
#[derive(Debug, Clone)]
pub struct QuoteClient {
    client: reqwest::Client,
    base_url: String,
}

impl QuoteClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Call `GET /quote` and return the bid.
    ///
    /// A non-200 status is decoded as an [`ErrorPayload`] and surfaced
    /// as [`ClientError::Remote`], carrying the service's message and
    /// details.
    pub async fn fetch_quote(&self, deadline: Deadline) -> Result<String> {
        let remaining = deadline.remaining().ok_or(ClientError::DeadlineExceeded)?;

        let response = self
            .client
            .get(format!("{}/quote", self.base_url))
            .timeout(remaining)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            let payload: ErrorPayload = response.json().await?;
            return Err(ClientError::Remote(payload));
        }

        let quote: Quote = response.json().await?;
        debug!(bid = %quote.bid, "quote received from rate service");
        Ok(quote.bid)
    }
}
