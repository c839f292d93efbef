//! Service configuration.
//!
//! Both processes are fixed-behavior executables: no CLI flags and no
//! config files. The defaults below are the deployed values; tests
//! override individual fields (ephemeral port, mock upstream).

use std::net::SocketAddr;
use std::time::Duration;

use crate::error::{Result, ServiceError};

/// Configuration for the rate service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address to listen on.
    pub host: String,
    /// Port to listen on. Port 0 binds an ephemeral port (tests).
    pub port: u16,
    /// External FX API endpoint.
    pub upstream_url: String,
    /// SQLite database URL.
    pub database_url: String,
    /// Budget for the upstream fetch stage.
    pub fetch_timeout: Duration,
    /// Budget for the persistence stage.
    pub persist_timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            upstream_url: upstream::DEFAULT_ENDPOINT.to_string(),
            database_url: storage::DEFAULT_DATABASE_URL.to_string(),
            fetch_timeout: Duration::from_millis(200),
            persist_timeout: Duration::from_millis(10),
        }
    }
}

impl ServiceConfig {
    /// Parse the configured listen address.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ServiceError::InvalidAddress(format!("{}:{}", self.host, self.port)))
    }
}
