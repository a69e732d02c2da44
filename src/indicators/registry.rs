//! Indicator categories.

use crate::models::signal::Indicator;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorCategory {
    Momentum,
    Trend,
    MarketStructure,
    Oscillator,
    Liquidity,
    Fundamental,
    Growth,
}

impl IndicatorCategory {
    /// Fundamentals and growth come from filings; everything else from price action.
    pub fn is_fundamental(&self) -> bool {
        matches!(self, IndicatorCategory::Fundamental | IndicatorCategory::Growth)
    }
}

impl Indicator {
    pub fn category(&self) -> IndicatorCategory {
        match self {
            Indicator::Rsi => IndicatorCategory::Momentum,
            Indicator::Sma | Indicator::Ema => IndicatorCategory::Trend,
            Indicator::Week52 => IndicatorCategory::MarketStructure,
            Indicator::Macd => IndicatorCategory::Oscillator,
            Indicator::ShortInterest | Indicator::ShortVolume => IndicatorCategory::Liquidity,
            Indicator::CurrentRatio
            | Indicator::DebtToEquity
            | Indicator::NetMargin
            | Indicator::OperatingCashFlow
            | Indicator::NetCashFlow
            | Indicator::ComprehensiveIncome => IndicatorCategory::Fundamental,
            Indicator::RevenueGrowthQuarterly
            | Indicator::RevenueGrowthAnnual
            | Indicator::NetIncomeGrowthQuarterly
            | Indicator::NetIncomeGrowthAnnual
            | Indicator::OpCashFlowGrowthQuarterly
            | Indicator::OpCashFlowGrowthAnnual
            | Indicator::ShareDilution => IndicatorCategory::Growth,
        }
    }

    pub fn is_fundamental(&self) -> bool {
        self.category().is_fundamental()
    }
}

/// Indicators of the given kind in canonical order.
pub fn indicators_where(fundamental: bool) -> Vec<Indicator> {
    Indicator::ALL
        .iter()
        .copied()
        .filter(|i| i.is_fundamental() == fundamental)
        .collect()
}
