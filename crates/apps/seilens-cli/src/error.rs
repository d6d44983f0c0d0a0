//! CLI error type with exit codes and recovery hints.

use seilens_types::{AnalysisError, ErrorCode};
use thiserror::Error;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Error types for CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file problem.
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem problem.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed.
    #[error("configuration parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Analysis pipeline error.
    #[error("{0}")]
    Analysis(#[from] AnalysisError),

    /// User input problem.
    #[error("{0}")]
    User(String),
}

impl CliError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a user-input error.
    pub fn user(msg: impl Into<String>) -> Self {
        Self::User(msg.into())
    }

    /// Get the service error code for this error.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::Config(_) | Self::Toml(_) | Self::User(_) => ErrorCode::InvalidRequest,
            Self::Io(_) => ErrorCode::InternalError,
            Self::Analysis(e) => e.error_code(),
        }
    }

    /// Process exit code: 2 for bad input, 3 for upstream trouble, 1 for
    /// everything else.
    pub fn exit_code(&self) -> i32 {
        let code = self.error_code();
        if code.is_validation_error() {
            2
        } else if code.is_upstream_error() {
            3
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::user("bad").exit_code(), 2);
        assert_eq!(
            CliError::Analysis(AnalysisError::Upstream("down".into())).exit_code(),
            3
        );
        assert_eq!(
            CliError::Analysis(AnalysisError::internal("bug")).exit_code(),
            1
        );
    }
}
