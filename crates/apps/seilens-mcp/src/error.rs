//! Error types for the MCP server.

use seilens_types::{AnalysisError, ErrorCode};
use thiserror::Error;

/// Result type for MCP operations.
pub type McpResult<T> = Result<T, McpServerError>;

/// Error types for MCP server operations.
#[derive(Debug, Error)]
pub enum McpServerError {
    /// Analysis pipeline error.
    #[error("{0}")]
    Analysis(#[from] AnalysisError),

    /// JSON serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl McpServerError {
    /// Create a new internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the service error code for this error.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::Analysis(e) => e.error_code(),
            Self::Serialization(_) => ErrorCode::InternalError,
            Self::Internal(_) => ErrorCode::InternalError,
        }
    }
}
