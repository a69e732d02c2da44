//! Tickrank Worker
//!
//! Runs the report on a cron schedule and publishes the resulting posts.

use dotenvy::dotenv;
use std::sync::Arc;
use tickrank::config::Config;
use tickrank::core::runtime::{ReportRuntime, RuntimeConfig};
use tickrank::core::scheduler::ReportScheduler;
use tickrank::logging;
use tickrank::metrics::Metrics;
use tickrank::services::polygon::PolygonMarketDataProvider;
use tickrank::services::posting::{poster_for, SocialPoster};
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = Config::from_env()?;
    let env = tickrank::config::get_environment();
    info!("Starting Tickrank Worker");
    info!(environment = %env, "Environment");

    let metrics = Arc::new(Metrics::new()?);
    let provider = Arc::new(PolygonMarketDataProvider::new(&config.polygon)?);
    let runtime = Arc::new(
        ReportRuntime::new(RuntimeConfig::from(&config), provider).with_metrics(metrics),
    );
    let poster: Arc<dyn SocialPoster> = Arc::from(poster_for(config.post_webhook_url.as_deref()));

    let scheduler = ReportScheduler::new(runtime, poster, &config.report_cron)?;
    info!(
        cron = %config.report_cron,
        tickers = ?config.tickers,
        webhook = config.post_webhook_url.is_some(),
        "Worker configured"
    );
    scheduler.start().await;

    info!("Worker started, waiting for shutdown signal...");
    signal::ctrl_c().await?;
    info!("Shutting down worker...");
    scheduler.stop().await;

    Ok(())
}
