//! Per-ticker inputs and aggregated results.

use crate::models::market::{FinancialFiling, HighLow, MacdPoint, ShortInterest, ShortVolume};
use crate::models::signal::{Indicator, IndicatorSignal, Signal};
use crate::signals::aggregation::aggregate_score;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fully materialized fetch results for one ticker on one date.
///
/// Evaluators only ever see this value, so evaluating the same inputs twice
/// gives the same signals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickerInputs {
    pub price: Option<f64>,
    pub sma: Option<f64>,
    pub ema: Option<f64>,
    pub rsi: Option<f64>,
    #[serde(default)]
    pub macd: Vec<MacdPoint>,
    pub high_low: Option<HighLow>,
    pub short_interest: Option<ShortInterest>,
    pub short_volume: Option<ShortVolume>,
    pub shares_outstanding: Option<f64>,
    /// Quarterly filings, newest first.
    #[serde(default)]
    pub quarterly: Vec<FinancialFiling>,
    /// Annual filings, newest first.
    #[serde(default)]
    pub annual: Vec<FinancialFiling>,
}

/// Aggregated view of one ticker for one reporting pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerResult {
    pub symbol: String,
    pub price: Option<f64>,
    pub projected_price: Option<f64>,
    pub signals: Vec<IndicatorSignal>,
    pub score: i64,
}

impl TickerResult {
    pub fn new(
        symbol: impl Into<String>,
        price: Option<f64>,
        projected_price: Option<f64>,
        signals: Vec<IndicatorSignal>,
    ) -> Self {
        let score = aggregate_score(&signals);
        Self {
            symbol: symbol.into(),
            price,
            projected_price,
            signals,
            score,
        }
    }

    pub fn signal_for(&self, indicator: Indicator) -> Option<&IndicatorSignal> {
        self.signals.iter().find(|s| s.indicator == indicator)
    }

    /// Project down to the ticker/score/indicator-signal shape used for posts.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ticker: self.symbol.clone(),
            score: self.score,
            indicators: self
                .signals
                .iter()
                .map(|s| (s.indicator, s.signal))
                .collect(),
        }
    }
}

/// Lossy projection of a [`TickerResult`]: only the call per indicator survives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub ticker: String,
    pub score: i64,
    pub indicators: BTreeMap<Indicator, Signal>,
}

impl Snapshot {
    pub fn count(&self, signal: Signal) -> usize {
        self.indicators.values().filter(|s| **s == signal).count()
    }
}
