//! Integration tests for the Worker
//!
//! Tests report publishing, webhook delivery and cron scheduling.

use serde_json::json;
use std::sync::Arc;
use tickrank::core::runtime::Report;
use tickrank::core::scheduler::{publish_report, ReportScheduler};
use tickrank::models::TickerResult;
use tickrank::posts::PostOptions;
use tickrank::services::posting::poster_for;
use tickrank::services::{LogPoster, SocialPoster, WebhookPoster};
use tickrank::AppError;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::test_utils::{rsi_inputs, runtime_for, FailingPoster, FixtureProvider, RecordingPoster};

fn scored(symbol: &str, score: i64) -> TickerResult {
    TickerResult {
        symbol: symbol.to_string(),
        price: None,
        projected_price: None,
        signals: Vec::new(),
        score,
    }
}

fn report(results: Vec<TickerResult>, top_n: usize) -> Report {
    Report {
        date: chrono::NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date"),
        top_n,
        results,
        failures: Vec::new(),
    }
}

#[tokio::test]
async fn publish_posts_best_line_then_each_pick() {
    let poster = RecordingPoster::default();
    let report = report(
        vec![scored("A", 50), scored("B", -10), scored("C", 30), scored("D", -40)],
        1,
    );

    let delivered = publish_report(&report, &poster, &PostOptions::default()).await;
    let posts = poster.posts();

    assert_eq!(delivered, 3);
    assert_eq!(posts.len(), 3);
    assert_eq!(posts[0], "Best stocks to buy: A (50.00)");
    assert!(posts[1].starts_with("$A "));
    assert!(posts[2].starts_with("$D "));
}

#[tokio::test]
async fn publish_skips_best_line_without_buys() {
    let poster = RecordingPoster::default();
    let report = report(vec![scored("X", -5), scored("Y", -15)], 5);

    let delivered = publish_report(&report, &poster, &PostOptions::default()).await;
    let posts = poster.posts();

    assert_eq!(delivered, 2);
    assert!(posts[0].starts_with("$Y "));
    assert!(posts[1].starts_with("$X "));
}

#[tokio::test]
async fn publish_counts_only_delivered_posts() {
    let report = report(vec![scored("A", 50)], 5);
    let delivered = publish_report(&report, &FailingPoster, &PostOptions::default()).await;
    assert_eq!(delivered, 0);
}

#[tokio::test]
async fn webhook_poster_sends_text_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/hook"))
        .and(body_json(json!({"text": "hello"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let poster = WebhookPoster::new(format!("{}/hook", server.uri()));
    poster.post("hello").await.unwrap();
}

#[tokio::test]
async fn webhook_poster_reports_rejections() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/hook"))
        .respond_with(ResponseTemplate::new(500).set_body_string("down"))
        .mount(&server)
        .await;

    let poster = WebhookPoster::new(format!("{}/hook", server.uri()));
    let err = poster.post("hello").await.unwrap_err();
    assert!(matches!(err, AppError::Provider { status: 500, .. }));
}

#[test]
fn log_poster_always_succeeds() {
    assert!(tokio_test::block_on(LogPoster.post("hello")).is_ok());
    assert!(tokio_test::block_on(poster_for(None).post("hello")).is_ok());
}

#[tokio::test]
async fn scheduler_rejects_invalid_cron() {
    let runtime = Arc::new(runtime_for(Arc::new(FixtureProvider::new()), &["A"]));
    let result = ReportScheduler::new(runtime, Arc::new(LogPoster), "every day at noon");
    assert!(matches!(result, Err(AppError::Config(_))));
}

#[tokio::test]
async fn scheduler_start_and_stop() {
    let runtime = Arc::new(runtime_for(Arc::new(FixtureProvider::new()), &["A"]));
    let scheduler =
        ReportScheduler::new(runtime, Arc::new(LogPoster), "0 30 21 * * Mon-Fri").unwrap();
    assert!(scheduler.schedule().upcoming(chrono::Utc).next().is_some());

    assert!(!scheduler.is_running().await);
    scheduler.start().await;
    assert!(scheduler.is_running().await);
    scheduler.stop().await;
    assert!(!scheduler.is_running().await);
}

#[tokio::test]
async fn scheduler_run_once_publishes_report() {
    let provider = FixtureProvider::new()
        .with_ticker("BUY", rsi_inputs(15.0))
        .with_ticker("SELL", rsi_inputs(85.0));
    let runtime = Arc::new(runtime_for(Arc::new(provider), &["BUY", "SELL"]));
    let poster = Arc::new(RecordingPoster::default());

    let scheduler = ReportScheduler::new(runtime, poster.clone(), "0 0 0 * * *")
        .unwrap()
        .with_options(PostOptions {
            hashtags: vec!["stocks".to_string()],
            ..Default::default()
        });

    let delivered = scheduler.run_once().await.unwrap();
    let posts = poster.posts();

    assert_eq!(delivered, 3);
    assert_eq!(posts[0], "Best stocks to buy: BUY (50.00)");
    assert!(posts[1].contains("RSI strong"));
    assert!(posts[2].contains("RSI weak"));
    assert!(posts[2].ends_with("#stocks"));
}
