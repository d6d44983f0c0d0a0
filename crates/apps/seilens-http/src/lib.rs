//! HTTP/REST adapter for the Seilens service.
//!
//! A thin axum layer over the shared [`seilens_analysis::AnalysisService`]:
//! handlers parse transport-level input, call the pipeline, and serialize
//! the very same `AnalysisResult` model the MCP adapter returns. No
//! classification logic lives here.

pub mod error;
pub mod handlers;
pub mod responses;
pub mod routes;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use seilens_analysis::AnalysisService;
use seilens_types::{AnalysisError, Result};

pub use error::HttpError;
pub use routes::router;

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Socket address to listen on.
    pub listen_addr: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
        }
    }
}

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// The one shared analysis pipeline.
    pub service: Arc<AnalysisService>,
}

/// Serve the HTTP API until ctrl-c.
pub async fn serve(config: HttpConfig, service: Arc<AnalysisService>) -> Result<()> {
    let state = AppState { service };
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            AnalysisError::internal(format!("failed to bind {}: {e}", config.listen_addr))
        })?;

    info!(listen_addr = %config.listen_addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AnalysisError::internal(format!("HTTP server error: {e}")))?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        return;
    }
    info!("Shutdown signal received");
}
