//! Shared types for the cambio workspace
//!
//! This crate holds the pieces every other crate agrees on:
//!
//! - [`Quote`] - a single fetched exchange rate, carried as opaque text
//! - [`ErrorPayload`] - the JSON error body the service returns and the
//!   client decodes
//! - [`Deadline`] - the per-stage deadline passed into every I/O-bound
//!   call
//!
//! Nothing in here performs I/O.

pub mod deadline;
pub mod types;

pub use deadline::Deadline;
pub use types::{ErrorPayload, Quote};
