//! API route definitions.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::AppState;

/// Build the full API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/analyze/wallet", post(handlers::analyze_wallet))
        .route("/analyze/compare", post(handlers::compare_wallets))
        .route("/network/health", get(handlers::network_health))
        .route("/network/stats", get(handlers::network_stats))
        .route("/account/:address", get(handlers::account))
        .route("/transactions/:address", get(handlers::transactions))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
