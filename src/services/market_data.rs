//! Market data provider interface consumed by the report pipeline.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::Result;
use crate::models::market::{
    DailyBar, FinancialFiling, HighLow, IndicatorValue, MacdPoint, OpenClose, ShortInterest,
    ShortVolume, Timeframe,
};

/// One method per data need. Every call is an independent query that may fail
/// on its own; an empty result means the provider had nothing to report.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    async fn get_open_close(&self, symbol: &str, date: NaiveDate) -> Result<OpenClose>;

    async fn get_sma(&self, symbol: &str) -> Result<Vec<IndicatorValue>>;

    async fn get_ema(&self, symbol: &str) -> Result<Vec<IndicatorValue>>;

    async fn get_rsi(&self, symbol: &str) -> Result<Vec<IndicatorValue>>;

    /// Recent MACD points. Callers must not assume any ordering.
    async fn get_macd(&self, symbol: &str) -> Result<Vec<MacdPoint>>;

    /// High/low over the 52 weeks ending at `date`.
    async fn get_52_week_high_low(&self, symbol: &str, date: NaiveDate)
        -> Result<Option<HighLow>>;

    async fn get_short_interest(&self, symbol: &str) -> Result<Option<ShortInterest>>;

    async fn get_short_volume(&self, symbol: &str, date: NaiveDate)
        -> Result<Option<ShortVolume>>;

    async fn get_shares_outstanding(&self, symbol: &str) -> Result<Option<f64>>;

    /// Filings for `timeframe`, newest first.
    async fn get_financials_history(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        limit: usize,
    ) -> Result<Vec<FinancialFiling>>;

    async fn get_daily_bars(
        &self,
        symbol: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<DailyBar>>;
}

/// External source of projected prices. No model ships with this crate.
#[async_trait]
pub trait PriceForecaster: Send + Sync {
    async fn project_price(&self, symbol: &str, date: NaiveDate) -> Result<Option<f64>>;
}
