//! Error codes and the main error type for the Seilens service.
//!
//! Both transport adapters map the same [`ErrorCode`] to their own wire
//! form (HTTP status code vs MCP tool error object), so a given failure
//! looks the same to callers regardless of transport.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Service error codes.
///
/// Codes are grouped by range: validation errors are never retried,
/// upstream errors may be retried with backoff, and internal errors are
/// contract violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
#[non_exhaustive]
pub enum ErrorCode {
    // =========================================================================
    // Validation Errors (0x0001 - 0x00FF)
    // =========================================================================
    /// Wallet address is missing or malformed
    InvalidAddress = 0x0001,
    /// Request parameters are malformed or out of range
    InvalidRequest = 0x0002,
    /// Snapshot fields are out of range (e.g. staking ratio outside [0,1])
    InvalidSnapshot = 0x0003,

    // =========================================================================
    // Upstream Errors (0x0100 - 0x01FF)
    // =========================================================================
    /// All chain endpoints are unreachable
    UpstreamUnavailable = 0x0100,
    /// Chain endpoint timed out
    UpstreamTimeout = 0x0101,
    /// Chain endpoint returned a response that could not be parsed
    UpstreamMalformed = 0x0102,
    /// Account not known to the chain
    NotFound = 0x0103,

    // =========================================================================
    // Internal Errors
    // =========================================================================
    /// Internal service error
    InternalError = 0xFFFF,
}

impl ErrorCode {
    /// Returns true if this is a validation error (0x0001-0x00FF)
    pub fn is_validation_error(&self) -> bool {
        let code = *self as u16;
        (0x0001..=0x00FF).contains(&code)
    }

    /// Returns true if this is an upstream error (0x0100-0x01FF)
    pub fn is_upstream_error(&self) -> bool {
        let code = *self as u16;
        (0x0100..=0x01FF).contains(&code)
    }

    /// Get the numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get a user-friendly suggestion for recovering from this error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            // Validation errors
            Self::InvalidAddress => {
                Some("Check the address. Sei wallet addresses start with 'sei1'.")
            }
            Self::InvalidRequest => Some("Check the request parameters against the tool schema."),
            Self::InvalidSnapshot => {
                Some("The chain returned out-of-range data. Retry against a different endpoint.")
            }

            // Upstream errors
            Self::UpstreamUnavailable => {
                Some("All Sei endpoints failed. Check connectivity or configure other endpoints.")
            }
            Self::UpstreamTimeout => {
                Some("The chain endpoint timed out. Retry, or raise the configured timeout.")
            }
            Self::UpstreamMalformed => {
                Some("The endpoint answered with unexpected JSON. It may be out of date.")
            }
            Self::NotFound => Some("The account does not exist on chain. Verify the address."),

            // Internal error
            Self::InternalError => Some("An internal error occurred. Please report this issue."),
        }
    }

    /// Get the error category name.
    pub fn category(&self) -> &'static str {
        if self.is_validation_error() {
            "Validation"
        } else if self.is_upstream_error() {
            "Upstream"
        } else {
            "Internal"
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::InvalidAddress => write!(f, "INVALID_ADDRESS"),
            ErrorCode::InvalidRequest => write!(f, "INVALID_REQUEST"),
            ErrorCode::InvalidSnapshot => write!(f, "INVALID_SNAPSHOT"),
            ErrorCode::UpstreamUnavailable => write!(f, "UPSTREAM_UNAVAILABLE"),
            ErrorCode::UpstreamTimeout => write!(f, "UPSTREAM_TIMEOUT"),
            ErrorCode::UpstreamMalformed => write!(f, "UPSTREAM_MALFORMED"),
            ErrorCode::NotFound => write!(f, "NOT_FOUND"),
            ErrorCode::InternalError => write!(f, "INTERNAL_ERROR"),
        }
    }
}

/// Main error type for all Seilens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AnalysisError {
    /// Wallet address is missing or malformed
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Request parameters are malformed
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Snapshot fields violate their documented ranges
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// Account not known to the chain
    #[error("account not found: {0}")]
    NotFound(String),

    /// All chain endpoints failed
    #[error("upstream unavailable: {0}")]
    Upstream(String),

    /// Chain endpoint timed out
    #[error("upstream timed out after {timeout_ms} ms")]
    UpstreamTimeout {
        /// Configured timeout that elapsed.
        timeout_ms: u64,
    },

    /// Chain endpoint returned unparseable data
    #[error("malformed upstream response: {0}")]
    UpstreamMalformed(String),

    /// JSON serialization failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal contract violation
    #[error("internal error: {0}")]
    Internal(String),
}

impl AnalysisError {
    /// Create a new internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Create a new invalid-snapshot error.
    pub fn invalid_snapshot(msg: impl Into<String>) -> Self {
        Self::InvalidSnapshot(msg.into())
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::InvalidAddress(_) => ErrorCode::InvalidAddress,
            Self::InvalidRequest(_) => ErrorCode::InvalidRequest,
            Self::InvalidSnapshot(_) => ErrorCode::InvalidSnapshot,
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::Upstream(_) => ErrorCode::UpstreamUnavailable,
            Self::UpstreamTimeout { .. } => ErrorCode::UpstreamTimeout,
            Self::UpstreamMalformed(_) => ErrorCode::UpstreamMalformed,
            Self::Serialization(_) => ErrorCode::InternalError,
            Self::Internal(_) => ErrorCode::InternalError,
        }
    }

    /// Returns true if retrying the operation could succeed.
    ///
    /// Only upstream failures are retryable; validation and internal
    /// errors are deterministic.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.error_code(),
            ErrorCode::UpstreamUnavailable | ErrorCode::UpstreamTimeout
        )
    }
}

/// Result type alias for Seilens operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::InvalidAddress as u16, 0x0001);
        assert_eq!(ErrorCode::InvalidRequest as u16, 0x0002);
        assert_eq!(ErrorCode::InvalidSnapshot as u16, 0x0003);
        assert_eq!(ErrorCode::UpstreamUnavailable as u16, 0x0100);
        assert_eq!(ErrorCode::UpstreamTimeout as u16, 0x0101);
        assert_eq!(ErrorCode::UpstreamMalformed as u16, 0x0102);
        assert_eq!(ErrorCode::NotFound as u16, 0x0103);
        assert_eq!(ErrorCode::InternalError as u16, 0xFFFF);
    }

    #[test]
    fn test_error_code_categories() {
        assert!(ErrorCode::InvalidAddress.is_validation_error());
        assert!(ErrorCode::InvalidSnapshot.is_validation_error());
        assert!(!ErrorCode::InvalidAddress.is_upstream_error());

        assert!(ErrorCode::UpstreamUnavailable.is_upstream_error());
        assert!(ErrorCode::UpstreamTimeout.is_upstream_error());
        assert!(!ErrorCode::UpstreamTimeout.is_validation_error());

        assert!(!ErrorCode::InternalError.is_validation_error());
        assert!(!ErrorCode::InternalError.is_upstream_error());
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(format!("{}", ErrorCode::InvalidAddress), "INVALID_ADDRESS");
        assert_eq!(
            format!("{}", ErrorCode::UpstreamUnavailable),
            "UPSTREAM_UNAVAILABLE"
        );
        assert_eq!(format!("{}", ErrorCode::InternalError), "INTERNAL_ERROR");
    }

    #[test]
    fn test_error_code_category_names() {
        assert_eq!(ErrorCode::InvalidAddress.category(), "Validation");
        assert_eq!(ErrorCode::UpstreamTimeout.category(), "Upstream");
        assert_eq!(ErrorCode::InternalError.category(), "Internal");
    }

    #[test]
    fn test_analysis_error_codes() {
        let err = AnalysisError::InvalidAddress("empty".into());
        assert_eq!(err.error_code(), ErrorCode::InvalidAddress);

        let err = AnalysisError::UpstreamTimeout { timeout_ms: 10_000 };
        assert_eq!(err.error_code(), ErrorCode::UpstreamTimeout);
        assert_eq!(format!("{}", err), "upstream timed out after 10000 ms");

        let err = AnalysisError::internal("oops");
        assert_eq!(err.error_code(), ErrorCode::InternalError);
    }

    #[test]
    fn test_retryability() {
        assert!(AnalysisError::Upstream("down".into()).is_retryable());
        assert!(AnalysisError::UpstreamTimeout { timeout_ms: 1 }.is_retryable());
        assert!(!AnalysisError::InvalidAddress("bad".into()).is_retryable());
        assert!(!AnalysisError::internal("bug").is_retryable());
    }

    #[test]
    fn test_all_codes_have_suggestions() {
        for code in [
            ErrorCode::InvalidAddress,
            ErrorCode::InvalidRequest,
            ErrorCode::InvalidSnapshot,
            ErrorCode::UpstreamUnavailable,
            ErrorCode::UpstreamTimeout,
            ErrorCode::UpstreamMalformed,
            ErrorCode::NotFound,
            ErrorCode::InternalError,
        ] {
            assert!(code.suggestion().is_some(), "{code} has no suggestion");
        }
    }
}
