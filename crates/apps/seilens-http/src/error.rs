//! HTTP error mapping.
//!
//! Each internal failure kind maps to one status-code category, consistent
//! with the MCP adapter's error objects: validation → 400, not-found → 404,
//! upstream timeout → 504, other upstream failures → 503, internal → 500.
//! The JSON body carries the same `{error, code, message, suggestion}`
//! shape as MCP tool errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use seilens_types::{AnalysisError, ErrorCode};

/// Wrapper giving [`AnalysisError`] an HTTP representation.
#[derive(Debug)]
pub struct HttpError(pub AnalysisError);

impl From<AnalysisError> for HttpError {
    fn from(err: AnalysisError) -> Self {
        Self(err)
    }
}

impl HttpError {
    /// The status code for this error's category.
    pub fn status(&self) -> StatusCode {
        match self.0.error_code() {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            code if code.is_validation_error() => StatusCode::BAD_REQUEST,
            code if code.is_upstream_error() => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let code = self.0.error_code();
        let status = self.status();

        // Internal details never reach the caller
        let message = if code == ErrorCode::InternalError {
            tracing::error!(error = %self.0, "Internal error");
            "internal error".to_string()
        } else {
            self.0.to_string()
        };

        let body = serde_json::json!({
            "error": code.to_string(),
            "code": code.code(),
            "message": message,
            "suggestion": code.suggestion(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let status = |err: AnalysisError| HttpError(err).status();

        assert_eq!(
            status(AnalysisError::InvalidAddress("x".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status(AnalysisError::InvalidRequest("x".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status(AnalysisError::InvalidSnapshot("x".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status(AnalysisError::NotFound("x".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status(AnalysisError::Upstream("x".into())),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status(AnalysisError::UpstreamTimeout { timeout_ms: 1 }),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            status(AnalysisError::UpstreamMalformed("x".into())),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status(AnalysisError::internal("x")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
