//! [`MarketDataProvider`] backed by the Polygon.io REST API

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use std::sync::Arc;

use super::client::PolygonRestClient;
use super::responses::{
    AggsResponse, FinancialsResponse, IndicatorResponse, ResultsEnvelope, TickerDetailsResponse,
};
use crate::config::PolygonConfig;
use crate::error::Result;
use crate::models::market::{
    DailyBar, FinancialFiling, HighLow, IndicatorValue, MacdPoint, OpenClose, ShortInterest,
    ShortVolume, Timeframe,
};
use crate::services::market_data::MarketDataProvider;

pub const MOVING_AVERAGE_WINDOW: u32 = 50;
pub const RSI_WINDOW: u32 = 14;
pub const MACD_SHORT_WINDOW: u32 = 12;
pub const MACD_LONG_WINDOW: u32 = 26;
pub const MACD_SIGNAL_WINDOW: u32 = 9;
/// Enough MACD points to fill the evaluator's lookback window.
pub const MACD_LIMIT: u32 = 5;
/// Largest page the aggregates endpoint serves.
pub const AGGS_MAX_LIMIT: i64 = 50_000;
pub const WEEK_RANGE_DAYS: i64 = 365;

fn fmt_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// One bar per calendar day in `from..=to` fits every trading day of the range.
pub fn aggs_limit(from: NaiveDate, to: NaiveDate) -> i64 {
    ((to - from).num_days() + 1).clamp(1, AGGS_MAX_LIMIT)
}

/// Max high and min low over finite bar values, or `None` when either is missing.
pub fn high_low_from_bars(bars: &[DailyBar]) -> Option<HighLow> {
    let high = bars
        .iter()
        .filter_map(|b| b.high.filter(|h| h.is_finite()))
        .fold(f64::NEG_INFINITY, f64::max);
    let low = bars
        .iter()
        .filter_map(|b| b.low.filter(|l| l.is_finite()))
        .fold(f64::INFINITY, f64::min);

    (high.is_finite() && low.is_finite()).then_some(HighLow { high, low })
}

/// Newest `end_date` first; filings without one go last.
pub fn sort_newest_first(filings: &mut [FinancialFiling]) {
    filings.sort_by(|a, b| b.end_date.cmp(&a.end_date));
}

#[derive(Clone)]
pub struct PolygonMarketDataProvider {
    client: Arc<PolygonRestClient>,
}

impl PolygonMarketDataProvider {
    pub fn new(config: &PolygonConfig) -> Result<Self> {
        Ok(Self::with_client(Arc::new(PolygonRestClient::new(config)?)))
    }

    pub fn with_client(client: Arc<PolygonRestClient>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Arc<PolygonRestClient> {
        &self.client
    }

    async fn single_value_indicator(
        &self,
        kind: &str,
        symbol: &str,
        window: u32,
    ) -> Result<Vec<IndicatorValue>> {
        let response: IndicatorResponse<IndicatorValue> = self
            .client
            .get_json(
                &["v1", "indicators", kind, symbol],
                &[
                    ("timespan", "day".to_string()),
                    ("window", window.to_string()),
                    ("series_type", "close".to_string()),
                    ("limit", "1".to_string()),
                ],
            )
            .await?;
        Ok(response.into_values())
    }
}

#[async_trait]
impl MarketDataProvider for PolygonMarketDataProvider {
    async fn get_open_close(&self, symbol: &str, date: NaiveDate) -> Result<OpenClose> {
        self.client
            .get_json(&["v1", "open-close", symbol, &fmt_date(date)], &[])
            .await
    }

    async fn get_sma(&self, symbol: &str) -> Result<Vec<IndicatorValue>> {
        self.single_value_indicator("sma", symbol, MOVING_AVERAGE_WINDOW)
            .await
    }

    async fn get_ema(&self, symbol: &str) -> Result<Vec<IndicatorValue>> {
        self.single_value_indicator("ema", symbol, MOVING_AVERAGE_WINDOW)
            .await
    }

    async fn get_rsi(&self, symbol: &str) -> Result<Vec<IndicatorValue>> {
        self.single_value_indicator("rsi", symbol, RSI_WINDOW).await
    }

    async fn get_macd(&self, symbol: &str) -> Result<Vec<MacdPoint>> {
        let response: IndicatorResponse<MacdPoint> = self
            .client
            .get_json(
                &["v1", "indicators", "macd", symbol],
                &[
                    ("timespan", "day".to_string()),
                    ("short_window", MACD_SHORT_WINDOW.to_string()),
                    ("long_window", MACD_LONG_WINDOW.to_string()),
                    ("signal_window", MACD_SIGNAL_WINDOW.to_string()),
                    ("series_type", "close".to_string()),
                    ("limit", MACD_LIMIT.to_string()),
                ],
            )
            .await?;
        Ok(response.into_values())
    }

    async fn get_52_week_high_low(
        &self,
        symbol: &str,
        date: NaiveDate,
    ) -> Result<Option<HighLow>> {
        let from = date - Duration::days(WEEK_RANGE_DAYS);
        let bars = self.get_daily_bars(symbol, from, date).await?;
        Ok(high_low_from_bars(&bars))
    }

    async fn get_short_interest(&self, symbol: &str) -> Result<Option<ShortInterest>> {
        let envelope: ResultsEnvelope<ShortInterest> = self
            .client
            .get_json(
                &["stocks", "v1", "short-interest"],
                &[("ticker", symbol.to_string())],
            )
            .await?;
        Ok(envelope.first())
    }

    async fn get_short_volume(
        &self,
        symbol: &str,
        date: NaiveDate,
    ) -> Result<Option<ShortVolume>> {
        let envelope: ResultsEnvelope<ShortVolume> = self
            .client
            .get_json(
                &["stocks", "v1", "short-volume"],
                &[("ticker", symbol.to_string()), ("date", fmt_date(date))],
            )
            .await?;
        Ok(envelope.first())
    }

    async fn get_shares_outstanding(&self, symbol: &str) -> Result<Option<f64>> {
        let details: TickerDetailsResponse = self
            .client
            .get_json(&["v3", "reference", "tickers", symbol], &[])
            .await?;
        Ok(details.results.and_then(|overview| overview.shares()))
    }

    async fn get_financials_history(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        limit: usize,
    ) -> Result<Vec<FinancialFiling>> {
        let response: FinancialsResponse = self
            .client
            .get_json(
                &["vX", "reference", "financials"],
                &[
                    ("ticker", symbol.to_string()),
                    ("timeframe", timeframe.as_str().to_string()),
                    ("limit", limit.to_string()),
                ],
            )
            .await?;
        let mut filings = response.results.unwrap_or_default();
        sort_newest_first(&mut filings);
        Ok(filings)
    }

    async fn get_daily_bars(
        &self,
        symbol: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<DailyBar>> {
        let response: AggsResponse = self
            .client
            .get_json(
                &[
                    "v2",
                    "aggs",
                    "ticker",
                    symbol,
                    "range",
                    "1",
                    "day",
                    &fmt_date(from),
                    &fmt_date(to),
                ],
                &[
                    ("adjusted", "true".to_string()),
                    ("limit", aggs_limit(from, to).to_string()),
                ],
            )
            .await?;
        Ok(response.results.unwrap_or_default())
    }
}
