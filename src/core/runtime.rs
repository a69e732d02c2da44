//! Batch report pipeline: fetch, evaluate, aggregate and rank a ticker set.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use futures_util::stream::{self, StreamExt};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::metrics::Metrics;
use crate::models::market::{finite, IndicatorValue, Timeframe};
use crate::models::ticker::{Snapshot, TickerInputs, TickerResult};
use crate::services::market_data::{MarketDataProvider, PriceForecaster};
use crate::signals::engine::SignalEngine;
use crate::signals::ranking::{ProjectionRanking, Ranking};

/// Filings requested per timeframe for growth series.
pub const FINANCIALS_LIMIT: usize = 10;

#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    pub tickers: Vec<String>,
    pub top_n: usize,
    pub concurrency: usize,
    pub financials_limit: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            tickers: vec!["AAPL".to_string(), "MSFT".to_string(), "GOOGL".to_string()],
            top_n: 5,
            concurrency: 5,
            financials_limit: FINANCIALS_LIMIT,
        }
    }
}

impl From<&Config> for RuntimeConfig {
    fn from(config: &Config) -> Self {
        Self {
            tickers: config.tickers.clone(),
            top_n: config.top_n,
            concurrency: config.concurrency,
            financials_limit: FINANCIALS_LIMIT,
        }
    }
}

/// The calendar day before `now`, in UTC.
pub fn previous_day(now: DateTime<Utc>) -> NaiveDate {
    (now - Duration::days(1)).date_naive()
}

#[derive(Debug, Clone, Serialize)]
pub struct TickerFailure {
    pub symbol: String,
    pub error: String,
}

/// Outcome of one reporting pass.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub date: NaiveDate,
    pub top_n: usize,
    /// Successful tickers, in input order.
    pub results: Vec<TickerResult>,
    pub failures: Vec<TickerFailure>,
}

impl Report {
    pub fn ranking(&self) -> Ranking<'_> {
        Ranking::new(&self.results)
    }

    pub fn best(&self) -> Vec<&TickerResult> {
        self.ranking().top_buys(self.top_n).to_vec()
    }

    pub fn worst(&self) -> Vec<&TickerResult> {
        self.ranking().top_sells(self.top_n).to_vec()
    }

    pub fn projections(&self) -> ProjectionRanking<'_> {
        ProjectionRanking::new(&self.results)
    }

    pub fn snapshots(&self) -> Vec<Snapshot> {
        self.results.iter().map(TickerResult::snapshot).collect()
    }
}

/// Newest reading of a single-valued indicator series.
fn latest(values: Option<Vec<IndicatorValue>>) -> Option<f64> {
    finite(values?.into_iter().next()?.value)
}

/// Tally of independent fetches for one ticker.
struct FetchTally<'a> {
    symbol: &'a str,
    metrics: Option<&'a Metrics>,
    attempted: usize,
    first_error: Option<AppError>,
    failed: usize,
}

impl<'a> FetchTally<'a> {
    fn new(symbol: &'a str, metrics: Option<&'a Metrics>) -> Self {
        Self {
            symbol,
            metrics,
            attempted: 0,
            first_error: None,
            failed: 0,
        }
    }

    /// Turn a failed fetch into absent data. Configuration errors pass through.
    fn absorb<T>(&mut self, source: &str, result: Result<T>) -> Result<Option<T>> {
        self.attempted += 1;
        match result {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_config() => Err(e),
            Err(e) => {
                warn!(symbol = %self.symbol, source, error = %e, "Fetch failed, treating as missing data");
                if let Some(metrics) = self.metrics {
                    metrics.provider_fetch_failures_total.inc();
                }
                self.failed += 1;
                if self.first_error.is_none() {
                    self.first_error = Some(e);
                }
                Ok(None)
            }
        }
    }

    /// Fail the ticker only when nothing at all could be fetched.
    fn finish(self) -> Result<()> {
        if self.attempted > 0 && self.failed == self.attempted {
            return Err(self.first_error.unwrap_or_else(|| {
                AppError::Internal(format!("every fetch failed for {}", self.symbol))
            }));
        }
        Ok(())
    }
}

pub struct ReportRuntime {
    config: RuntimeConfig,
    provider: Arc<dyn MarketDataProvider>,
    forecaster: Option<Arc<dyn PriceForecaster>>,
    metrics: Option<Arc<Metrics>>,
}

impl ReportRuntime {
    pub fn new(config: RuntimeConfig, provider: Arc<dyn MarketDataProvider>) -> Self {
        Self {
            config,
            provider,
            forecaster: None,
            metrics: None,
        }
    }

    pub fn with_forecaster(mut self, forecaster: Arc<dyn PriceForecaster>) -> Self {
        self.forecaster = Some(forecaster);
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn provider(&self) -> &Arc<dyn MarketDataProvider> {
        &self.provider
    }

    /// Issue every fetch for one ticker concurrently and freeze the results.
    pub async fn fetch_inputs(&self, symbol: &str, date: NaiveDate) -> Result<TickerInputs> {
        let p = self.provider.as_ref();
        let limit = self.config.financials_limit;

        let (
            open_close,
            sma,
            ema,
            rsi,
            macd,
            high_low,
            short_interest,
            short_volume,
            shares,
            quarterly,
            annual,
        ) = tokio::join!(
            p.get_open_close(symbol, date),
            p.get_sma(symbol),
            p.get_ema(symbol),
            p.get_rsi(symbol),
            p.get_macd(symbol),
            p.get_52_week_high_low(symbol, date),
            p.get_short_interest(symbol),
            p.get_short_volume(symbol, date),
            p.get_shares_outstanding(symbol),
            p.get_financials_history(symbol, Timeframe::Quarterly, limit),
            p.get_financials_history(symbol, Timeframe::Annual, limit),
        );

        let mut tally = FetchTally::new(symbol, self.metrics.as_deref());

        let inputs = TickerInputs {
            price: tally
                .absorb("open_close", open_close)?
                .and_then(|oc| finite(oc.close)),
            sma: latest(tally.absorb("sma", sma)?),
            ema: latest(tally.absorb("ema", ema)?),
            rsi: latest(tally.absorb("rsi", rsi)?),
            macd: tally.absorb("macd", macd)?.unwrap_or_default(),
            high_low: tally.absorb("52_week_high_low", high_low)?.flatten(),
            short_interest: tally.absorb("short_interest", short_interest)?.flatten(),
            short_volume: tally.absorb("short_volume", short_volume)?.flatten(),
            shares_outstanding: tally.absorb("shares_outstanding", shares)?.flatten(),
            quarterly: tally
                .absorb("financials_quarterly", quarterly)?
                .unwrap_or_default(),
            annual: tally.absorb("financials_annual", annual)?.unwrap_or_default(),
        };

        tally.finish()?;
        Ok(inputs)
    }

    async fn project_price(&self, symbol: &str, date: NaiveDate) -> Option<f64> {
        let forecaster = self.forecaster.as_ref()?;
        match forecaster.project_price(symbol, date).await {
            Ok(projected) => finite(projected),
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "Price projection failed");
                None
            }
        }
    }

    /// Fetch, evaluate and aggregate a single ticker.
    pub async fn evaluate_ticker(&self, symbol: &str, date: NaiveDate) -> Result<TickerResult> {
        let inputs = self.fetch_inputs(symbol, date).await?;
        let signals = SignalEngine::evaluate(&inputs);
        let projected = self.project_price(symbol, date).await;
        let result = TickerResult::new(symbol, inputs.price, projected, signals);

        if let Some(metrics) = &self.metrics {
            metrics.tickers_evaluated_total.inc();
        }
        debug!(
            symbol = %symbol,
            signals = result.signals.len(),
            score = result.score,
            "Ticker evaluated"
        );
        Ok(result)
    }

    /// Run the configured tickers with at most `concurrency` in flight.
    ///
    /// A ticker whose data cannot be fetched is reported as a failure without
    /// affecting the others. Configuration errors abort the run.
    pub async fn run(&self, date: NaiveDate) -> Result<Report> {
        info!(
            tickers = ?self.config.tickers,
            date = %date,
            concurrency = self.config.concurrency,
            "Generating signals"
        );

        // Owned symbols keep the stream's future `Send` for the scheduler task.
        let outcomes: Vec<(String, Result<TickerResult>)> =
            stream::iter(self.config.tickers.clone())
                .map(|symbol: String| async move {
                    let outcome = self.evaluate_ticker(&symbol, date).await;
                    (symbol, outcome)
                })
                .buffered(self.config.concurrency.max(1))
                .collect()
                .await;

        let mut results = Vec::with_capacity(outcomes.len());
        let mut failures = Vec::new();
        for (symbol, outcome) in outcomes {
            match outcome {
                Ok(result) => results.push(result),
                Err(e) if e.is_config() => return Err(e),
                Err(e) => {
                    warn!(symbol = %symbol, error = %e, "Ticker failed");
                    if let Some(metrics) = &self.metrics {
                        metrics.ticker_failures_total.inc();
                    }
                    failures.push(TickerFailure {
                        symbol,
                        error: e.to_string(),
                    });
                }
            }
        }

        info!(
            evaluated = results.len(),
            failed = failures.len(),
            "Report complete"
        );

        Ok(Report {
            date,
            top_n: self.config.top_n,
            results,
            failures,
        })
    }
}
