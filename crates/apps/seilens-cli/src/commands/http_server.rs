//! HTTP server command.

use tracing::info;

use seilens_http::{serve, HttpConfig};

use crate::commands::build_service;
use crate::config::CliConfig;
use crate::error::CliResult;

/// Start the HTTP API server. Blocks until shutdown.
pub async fn http_server(
    config: &CliConfig,
    offline: bool,
    listen: Option<String>,
) -> CliResult<String> {
    let service = build_service(config, offline)?;

    let http_config = HttpConfig {
        listen_addr: listen.unwrap_or_else(|| config.http.listen_addr.clone()),
    };

    info!(
        listen_addr = %http_config.listen_addr,
        live = service.is_live(),
        "Starting HTTP server"
    );

    serve(http_config, service).await?;

    Ok("HTTP server stopped.".to_string())
}
