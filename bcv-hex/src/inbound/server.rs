//! HTTP Server configuration and startup.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use bcv_types::RateProvider;

use super::handlers::{self, AppState};
use crate::ConversionService;

/// HTTP Server for the rate API.
pub struct HttpServer<R: RateProvider> {
    state: Arc<AppState<R>>,
    static_dir: Option<PathBuf>,
}

impl<R: RateProvider> HttpServer<R> {
    /// Creates a new HTTP server with the given service.
    pub fn new(service: ConversionService<R>) -> Self {
        Self {
            state: Arc::new(AppState { service }),
            static_dir: None,
        }
    }

    /// Serves files from `dir` for every path that is not an API route.
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        // Build HTTP metrics layer (uses globally set MeterProvider)
        let metrics = axum_otel_metrics::HttpMetricsLayerBuilder::new().build();

        let router = Router::new()
            .route("/health", get(handlers::health::<R>))
            .route("/api/rate", get(handlers::rate::<R>))
            .route("/api/to-bs", get(handlers::to_local::<R>))
            .route("/api/to-usd", get(handlers::to_usd::<R>))
            .route("/api-docs/openapi.json", get(handlers::openapi))
            .with_state(self.state.clone());

        let router = match &self.static_dir {
            Some(dir) => router.fallback_service(ServeDir::new(dir)),
            None => router,
        };

        router.layer(metrics).layer(TraceLayer::new_for_http())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
