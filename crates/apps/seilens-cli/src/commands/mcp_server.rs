//! MCP server command.
//!
//! Starts an MCP server on stdio for AI assistant integration.

use tracing::info;

use seilens_mcp::{run_server, McpServerConfig};

use crate::config::CliConfig;
use crate::error::CliResult;

/// Start the MCP server. Blocks until the transport closes.
pub async fn mcp_server(config: &CliConfig, offline: bool) -> CliResult<String> {
    info!(offline = offline, "Starting MCP server");

    let mcp_config = McpServerConfig {
        chain: config.chain.clone(),
        service: config.service_config(),
        offline,
    };

    // Blocks until the client disconnects or stdin closes
    run_server(mcp_config).await?;

    Ok("MCP server stopped.".to_string())
}
