//! HTTP endpoint server using Axum

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use chrono::{Duration, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, Level};

use crate::config::Config;
use crate::core::runtime::{previous_day, ReportRuntime, RuntimeConfig};
use crate::error::AppError;
use crate::metrics::Metrics;
use crate::models::ticker::TickerResult;
use crate::services::polygon::PolygonMarketDataProvider;

pub const SERVICE_NAME: &str = "tickrank";
/// Span of daily closes served by `/api/historical`.
pub const HISTORY_YEARS: u32 = 5;

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub runtime: Arc<ReportRuntime>,
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": SERVICE_NAME
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    // Increment in-flight requests
    state.metrics.http_requests_in_flight.inc();

    // Process request
    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();

    // Decrement in-flight requests
    state.metrics.http_requests_in_flight.dec();

    // Record metrics
    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    // Log if error status
    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

#[derive(Debug, Deserialize)]
pub struct HistoricalQuery {
    ticker: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HistoricalPoint {
    /// Bar start, milliseconds since the epoch.
    pub date: i64,
    pub close: Option<f64>,
}

fn history_start(today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_months(Months::new(12 * HISTORY_YEARS))
        .unwrap_or(today - Duration::days(365 * i64::from(HISTORY_YEARS)))
}

/// Daily closes for the last five years.
async fn historical(
    State(state): State<AppState>,
    Query(params): Query<HistoricalQuery>,
) -> Response {
    let ticker = params
        .ticker
        .map(|t| t.trim().to_uppercase())
        .unwrap_or_default();
    if ticker.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "ticker query param required" })),
        )
            .into_response();
    }

    let to = Utc::now().date_naive();
    let from = history_start(to);
    match state.runtime.provider().get_daily_bars(&ticker, from, to).await {
        Ok(bars) => {
            let points: Vec<HistoricalPoint> = bars
                .into_iter()
                .map(|b| HistoricalPoint {
                    date: b.timestamp,
                    close: b.close,
                })
                .collect();
            Json(points).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Evaluate one ticker for the previous day.
async fn ticker_signals(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
) -> Result<Json<TickerResult>, AppError> {
    let symbol = ticker.trim().to_uppercase();
    let date = previous_day(Utc::now());
    let result = state.runtime.evaluate_ticker(&symbol, date).await?;
    Ok(Json(result))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/historical", get(historical))
        .route("/api/signals/{ticker}", get(ticker_signals))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let provider = Arc::new(PolygonMarketDataProvider::new(&config.polygon)?);
    let runtime = ReportRuntime::new(RuntimeConfig::from(config), provider)
        .with_metrics(metrics.clone());

    let state = AppState {
        health: Arc::new(RwLock::new(HealthStatus::default())),
        metrics,
        start_time: Arc::new(Instant::now()),
        runtime: Arc::new(runtime),
    };
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    info!(port = config.port, "HTTP server listening on port {}", config.port);
    info!(
        "Metrics endpoint available at http://0.0.0.0:{}/metrics",
        config.port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
