//! MCP server implementation for Seilens.
//!
//! Uses the RMCP SDK to expose Sei wallet analysis to AI assistants over
//! stdio. Every tool delegates to the shared analysis pipeline and returns
//! the serialized `AnalysisResult` envelope as its payload.

use std::sync::Arc;

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use tracing::{debug, info, warn};

use seilens_analysis::{AnalysisService, ServiceConfig};
use seilens_chain::{ChainConfig, ChainDataSource, MockChainSource, RestChainSource};
use seilens_types::Result as ServiceResult;

use crate::error::McpServerError;
use crate::tools::{AnalyzeWalletInput, CompareWalletsInput};

/// Create a standardized error response for MCP tools.
///
/// Returns a JSON-formatted error with error code, message, and recovery
/// suggestion — the same shape the HTTP adapter puts in error bodies.
fn tool_error(error: &McpServerError) -> CallToolResult {
    let code = error.error_code();
    let message = if code == seilens_types::ErrorCode::InternalError {
        warn!(error = %error, "Internal error in MCP tool");
        "internal error".to_string()
    } else {
        error.to_string()
    };
    let response = serde_json::json!({
        "error": code.to_string(),
        "code": code.code(),
        "message": message,
        "suggestion": code.suggestion(),
    });
    CallToolResult::error(vec![Content::text(response.to_string())])
}

/// Configuration for the MCP server.
#[derive(Debug, Clone, Default)]
pub struct McpServerConfig {
    /// Chain endpoint settings.
    pub chain: ChainConfig,
    /// Analysis pipeline settings.
    pub service: ServiceConfig,
    /// Serve deterministic sample data instead of querying the chain.
    /// Results are visibly marked as non-live.
    pub offline: bool,
}

/// Seilens MCP Server.
///
/// Implements the MCP server handler with `analyze_wallet`,
/// `network_health`, and `compare_wallets` tools.
#[derive(Clone)]
pub struct SeilensMcpServer {
    /// The one shared analysis pipeline.
    service: Arc<AnalysisService>,
    /// Tool router for MCP.
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl SeilensMcpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: McpServerConfig) -> ServiceResult<Self> {
        let source: Arc<dyn ChainDataSource> = if config.offline {
            warn!("Offline mode - serving deterministic sample data, results are not live");
            Arc::new(MockChainSource::with_sample_data())
        } else {
            Arc::new(RestChainSource::new(config.chain)?)
        };

        let service = AnalysisService::new(source, config.service)?;

        info!(live = service.is_live(), "MCP server initialized");

        Ok(Self::with_service(Arc::new(service)))
    }

    /// Create a server around an existing pipeline.
    pub fn with_service(service: Arc<AnalysisService>) -> Self {
        Self {
            service,
            tool_router: Self::tool_router(),
        }
    }

    /// Analyze a single Sei wallet.
    #[tool(
        description = "Analyze a Sei wallet from live blockchain data: balance, category (Whale, Large Holder, Active, New, Dormant), whale/risk/influence scores, transaction patterns, and recommendations. The response's live_data flag tells whether the data came from the live chain."
    )]
    async fn analyze_wallet(
        &self,
        Parameters(input): Parameters<AnalyzeWalletInput>,
    ) -> Result<CallToolResult, McpError> {
        debug!(address = %input.address, "Processing analyze_wallet request");

        let result = match self.service.analyze_wallet(&input.address).await {
            Ok(result) => result,
            Err(e) => return Ok(tool_error(&McpServerError::Analysis(e))),
        };

        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        info!(address = %input.address, live = result.live_data, "Wallet analysis completed");

        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Get current Sei network health.
    #[tool(
        description = "Get real-time Sei network health: block height, bonded validator count, staking ratio, a normalized health score, and a status label (Excellent, Good, Degraded, Critical)."
    )]
    async fn network_health(&self) -> Result<CallToolResult, McpError> {
        debug!("Processing network_health request");

        let result = match self.service.network_health().await {
            Ok(result) => result,
            Err(e) => return Ok(tool_error(&McpServerError::Analysis(e))),
        };

        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Compare several Sei wallets.
    #[tool(
        description = "Compare 2-10 Sei wallets: per-wallet categories and scores from the same classifier as analyze_wallet, plus aggregate balance statistics, balance similarity, and combined influence."
    )]
    async fn compare_wallets(
        &self,
        Parameters(input): Parameters<CompareWalletsInput>,
    ) -> Result<CallToolResult, McpError> {
        debug!(count = input.addresses.len(), "Processing compare_wallets request");

        let result = match self.service.compare_wallets(&input.addresses).await {
            Ok(result) => result,
            Err(e) => return Ok(tool_error(&McpServerError::Analysis(e))),
        };

        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl rmcp::ServerHandler for SeilensMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Seilens MCP Server - Sei network wallet analysis from live blockchain data. \
                 Use `analyze_wallet` for a single address, `compare_wallets` for several, and \
                 `network_health` for chain-wide status. Every response carries a live_data flag \
                 distinguishing live chain data from fallback data."
                    .into(),
            ),
        }
    }
}

/// Run the MCP server on stdio transport.
pub async fn run_server(config: McpServerConfig) -> ServiceResult<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Seilens MCP server");

    let server = SeilensMcpServer::new(config)?;

    // Serve on stdio. If the transport fails (e.g., stdin already closed),
    // treat it as a clean exit rather than an error.
    let service = match server.serve(stdio()).await {
        Ok(s) => s,
        Err(e) => {
            info!("MCP transport closed during setup: {}", e);
            return Ok(());
        }
    };

    // Wait for the service to complete. Connection close (client
    // disconnect, stdin EOF) is expected and not an error condition.
    if let Err(e) = service.waiting().await {
        info!("MCP transport closed: {}", e);
    }

    info!("MCP server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHALE: &str = "sei1whale0000000000000000000000000000000000";

    fn offline_server() -> SeilensMcpServer {
        SeilensMcpServer::new(McpServerConfig {
            offline: true,
            ..Default::default()
        })
        .unwrap()
    }

    fn result_text(result: &CallToolResult) -> String {
        result.content[0]
            .as_text()
            .expect("tool result should be text")
            .text
            .clone()
    }

    #[tokio::test]
    async fn test_analyze_wallet_tool() {
        let server = offline_server();
        let result = server
            .analyze_wallet(Parameters(AnalyzeWalletInput {
                address: WHALE.to_string(),
            }))
            .await
            .unwrap();

        assert_ne!(result.is_error, Some(true));
        let json: serde_json::Value = serde_json::from_str(&result_text(&result)).unwrap();
        assert_eq!(json["report"]["kind"], "wallet");
        assert_eq!(json["report"]["category"], "whale");
        assert_eq!(json["live_data"], false);
    }

    #[tokio::test]
    async fn test_network_health_tool() {
        let server = offline_server();
        let result = server.network_health().await.unwrap();

        assert_ne!(result.is_error, Some(true));
        let json: serde_json::Value = serde_json::from_str(&result_text(&result)).unwrap();
        assert_eq!(json["report"]["kind"], "network");
        assert_eq!(json["report"]["status"], "good");
    }

    #[tokio::test]
    async fn test_tool_error_shape() {
        let server = offline_server();
        let result = server
            .analyze_wallet(Parameters(AnalyzeWalletInput {
                address: String::new(),
            }))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        let json: serde_json::Value = serde_json::from_str(&result_text(&result)).unwrap();
        assert_eq!(json["error"], "INVALID_ADDRESS");
        assert!(json["suggestion"].is_string());
        // Error responses never carry partial analysis data
        assert!(json.get("report").is_none());
    }

    #[tokio::test]
    async fn test_compare_wallets_tool_validates_count() {
        let server = offline_server();
        let result = server
            .compare_wallets(Parameters(CompareWalletsInput {
                addresses: vec![WHALE.to_string()],
            }))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        let json: serde_json::Value = serde_json::from_str(&result_text(&result)).unwrap();
        assert_eq!(json["error"], "INVALID_REQUEST");
    }

    /// The core dual-transport property: for the same chain data, the MCP
    /// tool payload and the HTTP response body are semantically equal field
    /// for field (timestamps are request-scoped and normalized out).
    #[tokio::test]
    async fn test_mcp_and_http_return_identical_data() {
        use axum::body::Body;
        use axum::http::Request;
        use tower::ServiceExt;

        let service = Arc::new(
            AnalysisService::new(
                Arc::new(MockChainSource::with_sample_data()),
                ServiceConfig::default(),
            )
            .unwrap(),
        );

        // MCP path
        let server = SeilensMcpServer::with_service(Arc::clone(&service));
        let mcp_result = server
            .analyze_wallet(Parameters(AnalyzeWalletInput {
                address: WHALE.to_string(),
            }))
            .await
            .unwrap();
        let mut mcp_json: serde_json::Value =
            serde_json::from_str(&result_text(&mcp_result)).unwrap();

        // HTTP path
        let app = seilens_http::router(seilens_http::AppState { service });
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/analyze/wallet")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::json!({"address": WHALE}).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let mut http_json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        // Timestamps are stamped per request; everything else must match
        mcp_json.as_object_mut().unwrap().remove("timestamp_ms");
        http_json.as_object_mut().unwrap().remove("timestamp_ms");
        assert_eq!(mcp_json, http_json);
    }

    /// Same equivalence for the network health operation.
    #[tokio::test]
    async fn test_network_health_equivalence_across_transports() {
        use axum::body::Body;
        use axum::http::Request;
        use tower::ServiceExt;

        let service = Arc::new(
            AnalysisService::new(Arc::new(MockChainSource::new()), ServiceConfig::default())
                .unwrap(),
        );

        let server = SeilensMcpServer::with_service(Arc::clone(&service));
        let mcp_result = server.network_health().await.unwrap();
        let mut mcp_json: serde_json::Value =
            serde_json::from_str(&result_text(&mcp_result)).unwrap();

        let app = seilens_http::router(seilens_http::AppState { service });
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/network/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let mut http_json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        mcp_json.as_object_mut().unwrap().remove("timestamp_ms");
        http_json.as_object_mut().unwrap().remove("timestamp_ms");
        assert_eq!(mcp_json, http_json);
    }
}
