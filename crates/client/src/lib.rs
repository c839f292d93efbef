//! Rate client for cambio
//!
//! Calls `GET /quote` on the rate service under one overall deadline,
//! decodes the JSON body (quote on 200, [`common::ErrorPayload`]
//! otherwise), and writes the bid to a local text file. One synchronous
//! call per invocation, no retries, no internal concurrency.

pub mod error;
pub mod output;
pub mod quote;

pub use error::{ClientError, Result};
pub use output::write_quote;
pub use quote::{QuoteClient, DEFAULT_BASE_URL, OUTPUT_FILE};
