//! Upstream FX rate fetcher
//!
//! One deadline-bound GET against the external rate API, decoding the
//! nested `{"USDBRL": {"bid": "..."}}` envelope into a [`common::Quote`].
//! Single attempt only - the fetcher never retries; a slow or broken
//! upstream surfaces as an [`UpstreamError`] for the caller to translate.

pub mod error;
pub mod fetcher;

pub use error::{Result, UpstreamError};
pub use fetcher::{decode_quote, RateFetcher, DEFAULT_ENDPOINT};
