//! HTTP Server configuration and startup.

use std::future::Future;
use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use products_types::{ProductRepository, RateCache};

use super::handlers::{self, AppState};
use crate::ProductService;

/// HTTP Server for the Products API.
pub struct HttpServer<R: ProductRepository, C: RateCache> {
    state: Arc<AppState<R, C>>,
}

impl<R: ProductRepository, C: RateCache> HttpServer<R, C> {
    /// Creates a new HTTP server with the given service.
    pub fn new(service: ProductService<R, C>) -> Self {
        Self {
            state: Arc::new(AppState { service }),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route("/Product", get(handlers::get_products::<R, C>))
            .route("/swagger/v1/swagger.json", get(handlers::openapi_json))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address until Ctrl+C / SIGTERM.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        self.run_until(addr, shutdown_signal()).await
    }

    /// Runs the server on the given address until `signal` resolves, then
    /// drains in-flight requests.
    pub async fn run_until(
        self,
        addr: &str,
        signal: impl Future<Output = ()> + Send + 'static,
    ) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(signal)
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
