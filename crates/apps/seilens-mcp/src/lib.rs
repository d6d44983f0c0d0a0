//! MCP server adapter for the Seilens service.
//!
//! Exposes wallet analysis, network health, and wallet comparison as MCP
//! tools over stdio. Tool results are the serialized
//! [`seilens_types::AnalysisResult`] — the same serde model the HTTP
//! adapter returns, so both transports provide identical data by
//! construction.

pub mod error;
pub mod server;
pub mod tools;

pub use error::McpServerError;
pub use server::{run_server, McpServerConfig, SeilensMcpServer};
