//! HTTP fetcher for the external FX rate API.

use common::{Deadline, Quote};
use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, UpstreamError};

/// External endpoint serving the USD-BRL rate.
pub const DEFAULT_ENDPOINT: &str = "https://economia.awesomeapi.com.br/json/last/USD-BRL";

/// Upstream response envelope: `{"USDBRL": {"bid": "...", ...}}`.
///
/// Only the bid is extracted; the remaining fields are ignored.
#[derive(Debug, Deserialize)]
struct RateEnvelope {
    #[serde(rename = "USDBRL")]
    usdbrl: PairRate,
}

#[derive(Debug, Deserialize)]
struct PairRate {
    bid: String,
}

/// Decode a raw upstream body into a [`Quote`].
///
/// Pure function of the bytes: identical input always yields an
/// identical quote.
pub fn decode_quote(body: &[u8]) -> Result<Quote> {
    let envelope: RateEnvelope =
        serde_json::from_slice(body).map_err(|e| UpstreamError::Decode(e.to_string()))?;
    Ok(Quote::new(envelope.usdbrl.bid))
}

/// Fetches the current rate from the external API.
///
/// Holds a shared `reqwest::Client`; reuse one fetcher across requests
/// rather than building a client per call.
#[derive(Debug, Clone)]
pub struct RateFetcher {
    client: reqwest::Client,
    endpoint: String,
}

impl RateFetcher {
    /// Create a fetcher against the given endpoint.
    ///
    /// Production code uses [`DEFAULT_ENDPOINT`]; tests point this at a
    /// local mock.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// The endpoint this fetcher targets.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issue one GET to the upstream API and extract the bid.
    ///
    /// Fails with [`UpstreamError::DeadlineExceeded`] if the deadline has
    /// already passed, [`UpstreamError::Timeout`] if it elapses in
    /// flight, and [`UpstreamError::Decode`] on a malformed body.
    /// No retries.
    pub async fn fetch(&self, deadline: Deadline) -> Result<Quote> {
        let remaining = deadline.remaining().ok_or(UpstreamError::DeadlineExceeded)?;

        let response = self
            .client
            .get(&self.endpoint)
            .timeout(remaining)
            .send()
            .await
            .map_err(UpstreamError::from_request)?;

        let body = response
            .bytes()
            .await
            .map_err(UpstreamError::from_request)?;

        let quote = decode_quote(&body)?;
        debug!(bid = %quote.bid, "fetched upstream rate");
        Ok(quote)
    }
}
