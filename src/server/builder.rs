//! ServerBuilder for wiring a store and a clock into a running server

use super::router::build_routes;
use super::state::AppState;
use crate::core::clock::{Clock, SystemClock};
use crate::core::repository::{BookingRepository, EmployeeRepository, SeatRepository};
use crate::storage::InMemoryStore;
use anyhow::{Result, anyhow};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builder for the seat-booking HTTP server
///
/// # Example
///
/// ```ignore
/// ServerBuilder::new()
///     .with_in_memory_store()
///     .serve("127.0.0.1:8080")
///     .await?;
/// ```
pub struct ServerBuilder {
    state: Option<Box<dyn FnOnce(Arc<dyn Clock>) -> AppState + Send>>,
    clock: Arc<dyn Clock>,
}

impl ServerBuilder {
    /// Create a builder using the system clock and no store
    pub fn new() -> Self {
        Self {
            state: None,
            clock: Arc::new(SystemClock),
        }
    }

    /// Use `store` for employees, seats and bookings
    pub fn with_store<S>(mut self, store: S) -> Self
    where
        S: EmployeeRepository + SeatRepository + BookingRepository + 'static,
    {
        let store = Arc::new(store);
        self.state = Some(Box::new(move |clock: Arc<dyn Clock>| AppState::new(store, clock)));
        self
    }

    /// Use a fresh, empty in-memory store
    pub fn with_in_memory_store(self) -> Self {
        self.with_store(InMemoryStore::new())
    }

    /// Override the source of "today" (used by tests)
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Build the shared state without routes
    pub fn build_state(self) -> Result<AppState> {
        let factory = self
            .state
            .ok_or_else(|| anyhow!("a store is required, call with_store() first"))?;
        Ok(factory(self.clock))
    }

    /// Build the router with CORS and request tracing
    pub fn build(self) -> Result<Router> {
        let state = self.build_state()?;
        Ok(build_routes(state)
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Handles SIGTERM and SIGINT (Ctrl+C).
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
