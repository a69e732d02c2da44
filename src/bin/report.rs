//! Tickrank Report
//!
//! One-shot CLI: evaluates the configured tickers for a date (default: the
//! previous day) and prints per-ticker signals and the rankings.
//!
//! Usage: `report [YYYY-MM-DD]`

use chrono::{NaiveDate, Utc};
use dotenvy::dotenv;
use std::env;
use std::sync::Arc;
use tickrank::config::Config;
use tickrank::core::runtime::{previous_day, ReportRuntime, RuntimeConfig};
use tickrank::logging;
use tickrank::services::polygon::PolygonMarketDataProvider;
use tickrank::signals::aggregation::aggregate_by_category;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = Config::from_env()?;
    let date = match env::args().nth(1) {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map_err(|e| format!("invalid date '{}': {}", raw, e))?,
        None => previous_day(Utc::now()),
    };

    let provider = Arc::new(PolygonMarketDataProvider::new(&config.polygon)?);
    let runtime = ReportRuntime::new(RuntimeConfig::from(&config), provider);

    info!(tickers = ?config.tickers, date = %date, "Starting report");
    let report = runtime.run(date).await?;

    for result in &report.results {
        println!("\n{} signals:", result.symbol);
        for signal in &result.signals {
            let value = signal
                .value
                .map(|v| format!("{:.4}", v))
                .unwrap_or_else(|| "-".to_string());
            println!(
                "  {:<24} {:>16} {:<4} {:>3}",
                signal.indicator.name(),
                value,
                signal.signal,
                signal.score
            );
        }
        let by_category = aggregate_by_category(&result.signals)
            .into_iter()
            .map(|(category, total)| format!("{:?} {:+}", category, total))
            .collect::<Vec<_>>()
            .join(", ");
        println!("By category: {}", by_category);
        println!("Total score: {}", result.score);
    }

    for failure in &report.failures {
        error!(symbol = %failure.symbol, error = %failure.error, "Ticker skipped");
    }

    let fmt_list = |items: Vec<&tickrank::models::TickerResult>| {
        items
            .iter()
            .map(|r| format!("{} ({})", r.symbol, r.score))
            .collect::<Vec<_>>()
            .join(", ")
    };
    println!("\nBest tickers to buy: [{}]", fmt_list(report.best()));
    println!("Worst tickers: [{}]", fmt_list(report.worst()));

    let projections = report.projections();
    if !projections.is_empty() {
        for m in &projections.gainers {
            println!("Projected gain: {} {:+.2}%", m.symbol, m.change_percent);
        }
        for m in &projections.losers {
            println!("Projected loss: {} {:+.2}%", m.symbol, m.change_percent);
        }
    }

    Ok(())
}
