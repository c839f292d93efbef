//! HTTP server lifecycle for the rate service.

use parking_lot::RwLock;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::config::ServiceConfig;
use crate::error::{Result, ServiceError};
use crate::handlers::AppState;
use crate::routes::quote_routes;
use crate::shutdown::ShutdownController;

/// The rate service HTTP server.
///
/// Wraps the quote router and serves it with graceful shutdown. The
/// bound address is recorded once the listener is up, so tests binding
/// port 0 can discover the ephemeral port.
pub struct QuoteServer {
    config: ServiceConfig,
    state: Arc<AppState>,
    running: Arc<AtomicBool>,
    bound_addr: Arc<RwLock<Option<SocketAddr>>>,
}

impl QuoteServer {
    pub fn new(config: ServiceConfig, state: Arc<AppState>) -> Self {
        Self {
            config,
            state,
            running: Arc::new(AtomicBool::new(false)),
            bound_addr: Arc::new(RwLock::new(None)),
        }
    }

    /// The address the server is bound to, if running.
    pub fn address(&self) -> Option<SocketAddr> {
        *self.bound_addr.read()
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Run the server until the shutdown token is cancelled.
    pub async fn run(&self, shutdown: CancellationToken) -> Result<()> {
        let addr = self.config.bind_addr()?;

        info!(%addr, "starting rate service");

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| ServiceError::bind(addr.to_string(), e))?;

        let local_addr = listener.local_addr().map_err(ServiceError::Io)?;
        *self.bound_addr.write() = Some(local_addr);

        info!(%local_addr, "rate service listening");
        self.running.store(true, Ordering::SeqCst);

        let result = axum::serve(listener, quote_routes(self.state.clone()))
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                info!("rate service received shutdown signal");
            })
            .await;

        self.running.store(false, Ordering::SeqCst);
        *self.bound_addr.write() = None;

        match result {
            Ok(()) => {
                info!("rate service shutdown complete");
                Ok(())
            }
            Err(e) => {
                error!(%e, "rate service error");
                Err(ServiceError::Io(e))
            }
        }
    }

    /// Spawn the server on a background task.
    ///
    /// Returns the join handle and the token that shuts it down.
    pub fn spawn(self) -> (tokio::task::JoinHandle<Result<()>>, CancellationToken) {
        let token = CancellationToken::new();
        let token_clone = token.clone();
        let handle = tokio::spawn(async move { self.run(token_clone).await });
        (handle, token)
    }

    /// Run the server until Ctrl+C.
    pub async fn run_with_ctrl_c(self) -> Result<()> {
        let shutdown = ShutdownController::with_ctrl_c();
        self.run(shutdown.token()).await
    }
}
