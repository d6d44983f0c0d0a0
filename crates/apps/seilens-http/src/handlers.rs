//! HTTP request handlers.
//!
//! Handlers only translate between the wire and the shared pipeline; every
//! analysis number in a response was produced by the same code path the MCP
//! adapter uses.

use axum::extract::{Path, Query, State};
use axum::Json;
use tracing::debug;

use seilens_types::{AnalysisError, AnalysisResult, DEFAULT_TX_LIMIT, MAX_TX_LIMIT, VERSION};

use crate::error::HttpError;
use crate::responses::{
    AnalyzeWalletRequest, CompareWalletsRequest, HealthResponse, NetworkStatsResponse,
    ServiceInfo, TransactionsQuery, TransactionsResponse,
};
use crate::AppState;

/// `GET /` — service banner.
pub async fn root(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Seilens Sei Network Analyzer API",
        status: "running",
        version: VERSION,
        data_source: if state.service.is_live() {
            "live_sei_blockchain"
        } else {
            "mock"
        },
    })
}

/// `GET /health` — liveness probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "seilens",
    })
}

/// `POST /analyze/wallet` — analyze a single wallet.
pub async fn analyze_wallet(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeWalletRequest>,
) -> Result<Json<AnalysisResult>, HttpError> {
    debug!(address = %request.address, "HTTP wallet analysis request");
    let result = state.service.analyze_wallet(&request.address).await?;
    Ok(Json(result))
}

/// `POST /analyze/compare` — compare several wallets.
pub async fn compare_wallets(
    State(state): State<AppState>,
    Json(request): Json<CompareWalletsRequest>,
) -> Result<Json<AnalysisResult>, HttpError> {
    debug!(count = request.addresses.len(), "HTTP comparison request");
    let result = state.service.compare_wallets(&request.addresses).await?;
    Ok(Json(result))
}

/// `GET /network/health` — network health report.
pub async fn network_health(
    State(state): State<AppState>,
) -> Result<Json<AnalysisResult>, HttpError> {
    let result = state.service.network_health().await?;
    Ok(Json(result))
}

/// `GET /network/stats` — raw network snapshot.
pub async fn network_stats(
    State(state): State<AppState>,
) -> Result<Json<NetworkStatsResponse>, HttpError> {
    let snapshot = state.service.network_snapshot().await?;
    let live_data = snapshot.live;
    Ok(Json(NetworkStatsResponse {
        network_stats: snapshot,
        live_data,
    }))
}

/// `GET /account/{address}` — raw account information without history.
pub async fn account(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<seilens_types::WalletSnapshot>, HttpError> {
    let snapshot = state.service.wallet_snapshot(&address, 0).await?;

    // An address with no balance, no account record, and no history does
    // not exist on chain
    if snapshot.balance == 0 && snapshot.account_number.is_none() && snapshot.transaction_count == 0
    {
        return Err(AnalysisError::NotFound(address).into());
    }

    Ok(Json(snapshot))
}

/// `GET /transactions/{address}` — transfer history.
pub async fn transactions(
    State(state): State<AppState>,
    Path(address): Path<String>,
    Query(query): Query<TransactionsQuery>,
) -> Result<Json<TransactionsResponse>, HttpError> {
    let limit = query.limit.unwrap_or(DEFAULT_TX_LIMIT).min(MAX_TX_LIMIT);
    let snapshot = state.service.wallet_snapshot(&address, limit).await?;

    Ok(Json(TransactionsResponse {
        address: snapshot.address,
        count: snapshot.transactions.len() as u32,
        limit,
        live_data: snapshot.live,
        transactions: snapshot.transactions,
    }))
}
