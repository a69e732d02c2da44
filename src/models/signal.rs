//! Per-indicator evaluation results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete call produced by an evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl Signal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::Buy => "buy",
            Signal::Sell => "sell",
            Signal::Hold => "hold",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// The closed set of indicators a ticker can be evaluated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Indicator {
    #[serde(rename = "RSI")]
    Rsi,
    #[serde(rename = "SMA")]
    Sma,
    #[serde(rename = "EMA")]
    Ema,
    #[serde(rename = "MACD")]
    Macd,
    #[serde(rename = "52W")]
    Week52,
    #[serde(rename = "SHORT_INT")]
    ShortInterest,
    #[serde(rename = "SHORT_VOL")]
    ShortVolume,
    #[serde(rename = "Current Ratio")]
    CurrentRatio,
    #[serde(rename = "Debt/Equity")]
    DebtToEquity,
    #[serde(rename = "Net Margin")]
    NetMargin,
    #[serde(rename = "Operating Cash Flow")]
    OperatingCashFlow,
    #[serde(rename = "Net Cash Flow")]
    NetCashFlow,
    #[serde(rename = "Comprehensive Income")]
    ComprehensiveIncome,
    #[serde(rename = "Revenue Growth (Q)")]
    RevenueGrowthQuarterly,
    #[serde(rename = "Revenue Growth (Y)")]
    RevenueGrowthAnnual,
    #[serde(rename = "Net Income Growth (Q)")]
    NetIncomeGrowthQuarterly,
    #[serde(rename = "Net Income Growth (Y)")]
    NetIncomeGrowthAnnual,
    #[serde(rename = "Op Cash Flow Growth (Q)")]
    OpCashFlowGrowthQuarterly,
    #[serde(rename = "Op Cash Flow Growth (Y)")]
    OpCashFlowGrowthAnnual,
    #[serde(rename = "Share Dilution")]
    ShareDilution,
}

impl Indicator {
    pub const ALL: [Indicator; 20] = [
        Indicator::Rsi,
        Indicator::Sma,
        Indicator::Ema,
        Indicator::Macd,
        Indicator::Week52,
        Indicator::ShortInterest,
        Indicator::ShortVolume,
        Indicator::CurrentRatio,
        Indicator::DebtToEquity,
        Indicator::NetMargin,
        Indicator::OperatingCashFlow,
        Indicator::NetCashFlow,
        Indicator::ComprehensiveIncome,
        Indicator::RevenueGrowthQuarterly,
        Indicator::RevenueGrowthAnnual,
        Indicator::NetIncomeGrowthQuarterly,
        Indicator::NetIncomeGrowthAnnual,
        Indicator::OpCashFlowGrowthQuarterly,
        Indicator::OpCashFlowGrowthAnnual,
        Indicator::ShareDilution,
    ];

    /// Canonical name, as used in snapshots and serialized output.
    pub fn name(&self) -> &'static str {
        match self {
            Indicator::Rsi => "RSI",
            Indicator::Sma => "SMA",
            Indicator::Ema => "EMA",
            Indicator::Macd => "MACD",
            Indicator::Week52 => "52W",
            Indicator::ShortInterest => "SHORT_INT",
            Indicator::ShortVolume => "SHORT_VOL",
            Indicator::CurrentRatio => "Current Ratio",
            Indicator::DebtToEquity => "Debt/Equity",
            Indicator::NetMargin => "Net Margin",
            Indicator::OperatingCashFlow => "Operating Cash Flow",
            Indicator::NetCashFlow => "Net Cash Flow",
            Indicator::ComprehensiveIncome => "Comprehensive Income",
            Indicator::RevenueGrowthQuarterly => "Revenue Growth (Q)",
            Indicator::RevenueGrowthAnnual => "Revenue Growth (Y)",
            Indicator::NetIncomeGrowthQuarterly => "Net Income Growth (Q)",
            Indicator::NetIncomeGrowthAnnual => "Net Income Growth (Y)",
            Indicator::OpCashFlowGrowthQuarterly => "Op Cash Flow Growth (Q)",
            Indicator::OpCashFlowGrowthAnnual => "Op Cash Flow Growth (Y)",
            Indicator::ShareDilution => "Share Dilution",
        }
    }

    /// Reader-facing label used in posts.
    pub fn pretty_name(&self) -> &'static str {
        match self {
            Indicator::ShortInterest => "Short Interest",
            Indicator::ShortVolume => "Short Vol",
            Indicator::Week52 => "52-Week",
            other => other.name(),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|i| i.name() == name)
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// MACD line, signal line and histogram at the newest point of the window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdDetail {
    pub value: f64,
    pub signal: f64,
    pub histogram: f64,
}

/// One evaluation result for one indicator on one ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSignal {
    pub indicator: Indicator,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(rename = "macd", skip_serializing_if = "Option::is_none")]
    pub macd_detail: Option<MacdDetail>,
    pub signal: Signal,
    /// Confidence in `[0, 100]`; always 0 for holds.
    pub score: u8,
}

impl IndicatorSignal {
    pub fn new(indicator: Indicator, value: f64, signal: Signal, score: u8) -> Self {
        let score = if signal == Signal::Hold { 0 } else { score };
        Self {
            indicator,
            value: Some(value),
            macd_detail: None,
            signal,
            score,
        }
    }

    pub fn hold(indicator: Indicator, value: f64) -> Self {
        Self::new(indicator, value, Signal::Hold, 0)
    }

    pub fn with_macd(mut self, detail: MacdDetail) -> Self {
        self.macd_detail = Some(detail);
        self
    }

    /// Signed contribution to a ticker's aggregate score.
    pub fn contribution(&self) -> i64 {
        match self.signal {
            Signal::Buy => i64::from(self.score),
            Signal::Sell => -i64::from(self.score),
            Signal::Hold => 0,
        }
    }
}
