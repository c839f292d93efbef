//! Logging infrastructure for cambio
//!
//! Structured logging via tracing. Both binaries initialize this first
//! so startup failures are reported through the same pipeline as
//! request-time events.
//!
//! ```ignore
//! use observability::{init_logging, LogFormat};
//!
//! init_logging("cambiod", LogFormat::Pretty)?;
//! tracing::info!("service started");
//! ```

pub mod logging;

pub use logging::{init_logging, LogFormat};
