//! MCP tool input types.
//!
//! Tool outputs have no types of their own: every tool serializes the
//! shared `AnalysisResult` envelope, keeping MCP responses identical to
//! HTTP responses field for field.

use rmcp::schemars;
use rmcp::schemars::JsonSchema;
use serde::Deserialize;

/// Input for the `analyze_wallet` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AnalyzeWalletInput {
    /// The Sei wallet address to analyze (starts with "sei1").
    pub address: String,
}

/// Input for the `compare_wallets` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CompareWalletsInput {
    /// The Sei wallet addresses to compare (between 2 and 10).
    pub addresses: Vec<String>,
}
