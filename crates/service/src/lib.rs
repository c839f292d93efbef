//! HTTP rate service for cambio
//!
//! Exposes one operation, `GET /quote`, which fetches the current
//! USD-BRL rate from the upstream API, persists it, and returns it as
//! JSON. Each stage runs under its own deadline derived from the moment
//! the stage begins:
//!
//! 1. fetch the rate (200ms budget) - failure responds 408, no persist
//! 2. persist the quote (10ms budget) - failure is logged and responds
//!    408; persistence is part of serving the quote
//! 3. respond `200 {"bid": "..."}`
//!
//! Handler errors never crash the process; startup failures are decided
//! at the binary's top level only.
//!
//! The crate also carries the server lifecycle: [`QuoteServer`] binds,
//! serves, and shuts down gracefully on a `CancellationToken`, with
//! [`ShutdownController`] providing Ctrl+C wiring for the binary.

pub mod config;
pub mod error;
pub mod handlers;
pub mod http;
pub mod routes;
pub mod shutdown;

pub use config::ServiceConfig;
pub use error::{Result, ServiceError};
pub use handlers::AppState;
pub use http::QuoteServer;
pub use routes::quote_routes;
pub use shutdown::ShutdownController;
