//! Integration tests for the API Server
//!
//! Tests HTTP endpoints, health checks, metrics, and ticker lookups.

use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{method, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::test_utils::{rsi_inputs, FixtureProvider, TestApp, API_KEY};

fn fixture_app() -> TestApp {
    let provider = FixtureProvider::new()
        .with_ticker("BUY", rsi_inputs(15.0))
        .with_ticker("SELL", rsi_inputs(85.0));
    TestApp::new(Arc::new(provider))
}

#[tokio::test]
async fn health_endpoint_reports_healthy_status() {
    let app = fixture_app();
    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["uptime_seconds"].as_u64().is_some());
    assert_eq!(body["service"], "tickrank");
}

#[tokio::test]
async fn metrics_endpoint_exposes_prometheus_metrics() {
    let app = fixture_app();
    for _ in 0..3 {
        let _ = app.server.get("/health").await;
    }

    let response = app.server.get("/metrics").await;
    assert_eq!(response.status_code(), 200);

    let body = response.text();
    assert!(body.contains("http_requests_total"));
    assert!(body.contains("http_request_duration_seconds"));
    assert!(body.contains("http_requests_in_flight"));
    assert!(body.contains("tickers_evaluated_total"));
    assert!(app.metrics.http_requests_total.get() >= 3);
}

#[tokio::test]
async fn historical_requires_ticker() {
    let app = fixture_app();

    let response = app.server.get("/api/historical").await;
    assert_eq!(response.status_code(), 400);
    assert_eq!(
        response.json::<Value>(),
        json!({"error": "ticker query param required"})
    );

    let response = app
        .server
        .get("/api/historical")
        .add_query_param("ticker", "  ")
        .await;
    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn historical_returns_daily_closes() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/v2/aggs/ticker/AAPL/range/1/day/\d{4}-\d{2}-\d{2}/\d{4}-\d{2}-\d{2}$"))
        .and(query_param("apiKey", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ticker": "AAPL",
            "results": [
                {"t": 1704153600000i64, "o": 187.15, "c": 185.64},
                {"t": 1704240000000i64, "o": 184.22}
            ]
        })))
        .expect(1)
        .mount(&mock)
        .await;

    let app = TestApp::with_polygon(&mock);
    let response = app
        .server
        .get("/api/historical")
        .add_query_param("ticker", "aapl")
        .await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(
        body,
        json!([
            {"date": 1704153600000i64, "close": 185.64},
            {"date": 1704240000000i64, "close": null}
        ])
    );
}

#[tokio::test]
async fn historical_surfaces_provider_errors() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/v2/aggs/ticker/.*"))
        .respond_with(ResponseTemplate::new(404).set_body_string("unknown ticker"))
        .mount(&mock)
        .await;

    let app = TestApp::with_polygon(&mock);
    let response = app
        .server
        .get("/api/historical")
        .add_query_param("ticker", "NOPE")
        .await;
    assert_eq!(response.status_code(), 404);

    let body: Value = response.json();
    assert_eq!(body["error"], "404 Not Found - unknown ticker");
}

#[tokio::test]
async fn signals_endpoint_evaluates_ticker() {
    let app = fixture_app();
    let response = app.server.get("/api/signals/buy").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["symbol"], "BUY");
    assert_eq!(body["score"], 50);
    assert_eq!(body["signals"][0]["indicator"], "RSI");
    assert_eq!(body["signals"][0]["signal"], "buy");
    assert_eq!(body["signals"][0]["score"], 50);
    assert!(body["projectedPrice"].is_null());

    let response = app.server.get("/api/signals/SELL").await;
    let body: Value = response.json();
    assert_eq!(body["score"], -50);
    assert_eq!(app.metrics.tickers_evaluated_total.get(), 2);
}

#[tokio::test]
async fn signals_endpoint_reports_unknown_ticker() {
    let app = fixture_app();
    let response = app.server.get("/api/signals/MISSING").await;
    assert_eq!(response.status_code(), 404);

    let body: Value = response.json();
    assert_eq!(body["status"], 404);
}
