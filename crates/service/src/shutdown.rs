//! Graceful shutdown coordination.
//!
//! Built on `tokio_util::sync::CancellationToken`: tokens are cloneable,
//! cancellation can be observed without consuming them, and manual
//! cancellation is available for tests.

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Coordinates graceful shutdown of the server.
#[derive(Clone, Default)]
pub struct ShutdownController {
    token: CancellationToken,
}

impl ShutdownController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller whose token cancels on Ctrl+C.
    pub fn with_ctrl_c() -> Self {
        let controller = Self::new();
        let token = controller.token.clone();

        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("received Ctrl+C, shutting down");
                    token.cancel();
                }
                Err(e) => {
                    warn!("failed to listen for Ctrl+C: {}", e);
                }
            }
        });

        controller
    }

    /// Get a clone of the shutdown token.
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Trigger shutdown manually.
    pub fn shutdown(&self) {
        info!("manual shutdown triggered");
        self.token.cancel();
    }

    /// Whether shutdown has been triggered.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn manual_shutdown_cancels_token() {
        let controller = ShutdownController::new();
        let token = controller.token();

        assert!(!controller.is_cancelled());
        controller.shutdown();

        assert!(controller.is_cancelled());
        assert!(token.is_cancelled());
        // Cancelled tokens resolve immediately.
        token.cancelled().await;
    }
}
