//! HTTP API tests against the deterministic mock source.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use seilens_analysis::{AnalysisService, ServiceConfig};
use seilens_chain::MockChainSource;
use seilens_http::{router, AppState};

const WHALE: &str = "sei1whale0000000000000000000000000000000000";

fn app(source: MockChainSource) -> Router {
    let service = AnalysisService::new(Arc::new(source), ServiceConfig::default()).unwrap();
    router(AppState {
        service: Arc::new(service),
    })
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_returns_minimal_body() {
    let response = app(MockChainSource::new()).oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "seilens");
}

#[tokio::test]
async fn analyze_wallet_returns_whale_report() {
    let response = app(MockChainSource::with_sample_data())
        .oneshot(post_json("/analyze/wallet", serde_json::json!({"address": WHALE})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["request"]["operation"], "analyze_wallet");
    assert_eq!(json["request"]["address"], WHALE);
    assert_eq!(json["live_data"], false);
    assert_eq!(json["report"]["kind"], "wallet");
    assert_eq!(json["report"]["category"], "whale");
    assert_eq!(json["report"]["metrics"]["balance_sei"], 5_000_000.0);
}

#[tokio::test]
async fn analyze_wallet_rejects_empty_address() {
    let response = app(MockChainSource::new())
        .oneshot(post_json("/analyze/wallet", serde_json::json!({"address": ""})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "INVALID_ADDRESS");
    assert!(json["suggestion"].is_string());
}

#[tokio::test]
async fn upstream_failure_maps_to_service_unavailable_without_partial_data() {
    let source = MockChainSource::with_sample_data();
    source.set_failing(true);

    let response = app(source)
        .oneshot(post_json("/analyze/wallet", serde_json::json!({"address": WHALE})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let json = body_json(response).await;
    assert_eq!(json["error"], "UPSTREAM_UNAVAILABLE");
    // No wallet fields leak into an error body
    assert!(json.get("report").is_none());
    assert!(json.get("live_data").is_none());
}

#[tokio::test]
async fn network_health_returns_good_status() {
    let response = app(MockChainSource::new())
        .oneshot(get("/network/health"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["request"]["operation"], "network_health");
    assert_eq!(json["report"]["kind"], "network");
    assert_eq!(json["report"]["status"], "good");
    assert_eq!(json["report"]["health_score"], 0.747);
    assert_eq!(json["report"]["block_height"], 161_611_789u64);
}

#[tokio::test]
async fn compare_requires_at_least_two_addresses() {
    let response = app(MockChainSource::new())
        .oneshot(post_json(
            "/analyze/compare",
            serde_json::json!({"addresses": ["sei1only"]}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "INVALID_REQUEST");
}

#[tokio::test]
async fn compare_returns_combined_report() {
    let response = app(MockChainSource::with_sample_data())
        .oneshot(post_json(
            "/analyze/compare",
            serde_json::json!({
                "addresses": [WHALE, "sei1trader000000000000000000000000000000000"]
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["report"]["kind"], "comparison");
    assert_eq!(json["report"]["summary"]["total_addresses"], 2);
    assert_eq!(json["report"]["wallets"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn unknown_account_is_not_found() {
    let response = app(MockChainSource::new())
        .oneshot(get("/account/sei1doesnotexist"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"], "NOT_FOUND");
}

#[tokio::test]
async fn known_account_returns_snapshot() {
    let response = app(MockChainSource::with_sample_data())
        .oneshot(get(&format!("/account/{WHALE}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["address"], WHALE);
    assert_eq!(json["live"], false);
}

#[tokio::test]
async fn transactions_respects_and_caps_limit() {
    let app = app(MockChainSource::with_sample_data());

    let response = app
        .clone()
        .oneshot(get(
            "/transactions/sei1trader000000000000000000000000000000000?limit=10",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["count"], 10);
    assert_eq!(json["limit"], 10);

    // Limits beyond the maximum are clamped, not rejected
    let response = app
        .oneshot(get(
            "/transactions/sei1trader000000000000000000000000000000000?limit=99999",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["limit"], 200);
}

#[tokio::test]
async fn root_banner_reports_mock_source() {
    let response = app(MockChainSource::new()).oneshot(get("/")).await.unwrap();
    let json = body_json(response).await;
    assert_eq!(json["status"], "running");
    assert_eq!(json["data_source"], "mock");
}
