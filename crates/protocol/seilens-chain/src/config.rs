//! Chain source configuration.

use serde::{Deserialize, Serialize};

use seilens_types::{
    AnalysisError, Result, DEFAULT_CHAIN_ID, DEFAULT_REST_ENDPOINTS, DEFAULT_RETRY_BACKOFF_MS,
    DEFAULT_RETRY_ROUNDS, DEFAULT_UPSTREAM_TIMEOUT_MS,
};

/// Configuration for the REST chain source.
///
/// Loaded once at startup and passed in by value; never re-read while the
/// service is running.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// REST endpoints tried in order until one answers.
    pub rest_endpoints: Vec<String>,
    /// Expected chain ID, used when the chain response omits one.
    pub chain_id: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Number of passes over the endpoint list before giving up.
    pub retry_rounds: u32,
    /// Backoff between passes in milliseconds.
    pub retry_backoff_ms: u64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rest_endpoints: DEFAULT_REST_ENDPOINTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            chain_id: DEFAULT_CHAIN_ID.to_string(),
            timeout_ms: DEFAULT_UPSTREAM_TIMEOUT_MS,
            retry_rounds: DEFAULT_RETRY_ROUNDS,
            retry_backoff_ms: DEFAULT_RETRY_BACKOFF_MS,
        }
    }
}

impl ChainConfig {
    /// Check that the configuration can serve requests.
    pub fn validate(&self) -> Result<()> {
        if self.rest_endpoints.is_empty() {
            return Err(AnalysisError::InvalidRequest(
                "at least one REST endpoint is required".into(),
            ));
        }
        if self.timeout_ms == 0 {
            return Err(AnalysisError::InvalidRequest(
                "timeout_ms must be positive".into(),
            ));
        }
        if self.retry_rounds == 0 {
            return Err(AnalysisError::InvalidRequest(
                "retry_rounds must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
