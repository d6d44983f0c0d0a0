//! Request and response bodies specific to the HTTP transport.
//!
//! Analysis endpoints return [`seilens_types::AnalysisResult`] directly —
//! only the raw passthrough endpoints and the service banner have shapes
//! of their own.

use serde::{Deserialize, Serialize};

use seilens_types::{NetworkSnapshot, TransferRecord};

/// Body of `POST /analyze/wallet`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeWalletRequest {
    /// The wallet address to analyze.
    pub address: String,
}

/// Body of `POST /analyze/compare`.
#[derive(Debug, Clone, Deserialize)]
pub struct CompareWalletsRequest {
    /// The addresses to compare (at least two).
    pub addresses: Vec<String>,
}

/// Response of `GET /`.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    /// Service banner.
    pub message: &'static str,
    /// Always "running".
    pub status: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// "live_sei_blockchain" or "mock".
    pub data_source: &'static str,
}

/// Response of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always "healthy" while the process serves requests.
    pub status: &'static str,
    /// Service identifier.
    pub service: &'static str,
}

/// Response of `GET /network/stats`.
#[derive(Debug, Clone, Serialize)]
pub struct NetworkStatsResponse {
    /// The raw snapshot.
    pub network_stats: NetworkSnapshot,
    /// Provenance of the snapshot.
    pub live_data: bool,
}

/// Query parameters of `GET /transactions/{address}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionsQuery {
    /// Maximum transactions to return (capped server-side).
    pub limit: Option<u32>,
}

/// Response of `GET /transactions/{address}`.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionsResponse {
    /// The requested address.
    pub address: String,
    /// Transfer history, newest first.
    pub transactions: Vec<TransferRecord>,
    /// Number of transactions returned.
    pub count: u32,
    /// The effective limit applied.
    pub limit: u32,
    /// Provenance of the history.
    pub live_data: bool,
}
