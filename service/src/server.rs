//! Axum adapter.
//!
//! Mounts the export handler on a router. Every method is routed to the
//! handler so that non-POST requests get the handler's own 405 reply.

use std::sync::Arc;

use axum::{
    Router,
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::{HeaderMap, Method, header::CONTENT_TYPE},
    response::{IntoResponse, Json, Response},
    routing::{any, get},
};
use export_core::{ExportConfig, ExportError, Result, ServerConfig};
use serde::Serialize;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

use crate::handler::{ExportHandler, ExportInput};
use crate::response::ExportReply;

/// Application state shared between handlers
#[derive(Clone)]
pub struct AppState {
    /// The export pipeline
    pub handler: Arc<ExportHandler>,
}

/// Response for health check endpoint
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: &'static str,
    /// Server version
    pub version: &'static str,
}

/// Builds the router for the export endpoint
pub struct ExportRouterFactory {
    handler: Arc<ExportHandler>,
    server: ServerConfig,
}

impl ExportRouterFactory {
    /// Create a factory from configuration
    #[must_use]
    pub fn new(config: &ExportConfig) -> Self {
        Self {
            handler: Arc::new(ExportHandler::from_config(config)),
            server: config.server.clone(),
        }
    }

    /// Create the router with tracing, body limit and optional CORS layers
    pub fn create_router(&self) -> Router {
        let state = AppState {
            handler: Arc::clone(&self.handler),
        };

        let router = Router::new()
            .route(&self.server.route, any(export_xlsx))
            .route("/health", get(health_check))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(DefaultBodyLimit::max(self.server.max_body_bytes)),
            );

        if self.server.cors {
            router.layer(CorsLayer::permissive())
        } else {
            router
        }
    }
}

/// Handler for the export endpoint
async fn export_xlsx(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let input = ExportInput {
        method,
        content_type: headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned),
        body,
    };

    // Encoding is CPU-bound; keep it off the async workers.
    let handler = Arc::clone(&state.handler);
    match tokio::task::spawn_blocking(move || handler.handle(input)).await {
        Ok(reply) => reply.into_response(),
        Err(e) => {
            error!("Export task did not complete: {e}");
            ExportReply::from_error(&ExportError::service(format!("Export task failed: {e}")))
                .into_response()
        }
    }
}

/// Handler for GET /health endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Bind and serve until Ctrl-C or SIGTERM.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(config: &ExportConfig) -> Result<()> {
    let app = ExportRouterFactory::new(config).create_router();
    let addr = config.server.bind_address();

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| ExportError::service(format!("Failed to bind to address {addr}: {e}")))?;

    info!(
        "Serving POST {} on http://{addr}",
        config.server.route
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ExportError::service(format!("Server error: {e}")))?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
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
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received terminate signal, shutting down"),
    }
}
