use crate::models::market::{FinancialFiling, LineItem};
use crate::models::signal::{Indicator, IndicatorSignal, Signal};
use crate::signals::scoring::clamp_score;

/// Relative change beyond this is significant either way.
pub const GROWTH_THRESHOLD: f64 = 0.05;

/// Relative change from the oldest to the newest value of a newest-first series.
///
/// Needs at least two values and a non-zero oldest value.
pub fn compute_growth(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let latest = values[0];
    let oldest = values[values.len() - 1];
    if oldest == 0.0 {
        return None;
    }
    Some((latest - oldest) / oldest.abs()).filter(|g| g.is_finite())
}

/// Finite values of a line item across filings, keeping filing order.
pub fn line_series(filings: &[FinancialFiling], item: LineItem) -> Vec<f64> {
    filings.iter().filter_map(|f| f.line(item)).collect()
}

pub fn share_series(filings: &[FinancialFiling]) -> Vec<f64> {
    filings
        .iter()
        .filter_map(FinancialFiling::shares_outstanding)
        .collect()
}

fn classify(indicator: Indicator, growth: f64, rising: Signal, falling: Signal) -> IndicatorSignal {
    let score = clamp_score(growth.abs() * 100.0);
    if growth > GROWTH_THRESHOLD {
        IndicatorSignal::new(indicator, growth, rising, score)
    } else if growth < -GROWTH_THRESHOLD {
        IndicatorSignal::new(indicator, growth, falling, score)
    } else {
        IndicatorSignal::hold(indicator, growth)
    }
}

/// Growth in a line item is a buy, shrinkage a sell.
pub fn evaluate_growth(
    indicator: Indicator,
    filings: &[FinancialFiling],
    item: LineItem,
) -> Option<IndicatorSignal> {
    let growth = compute_growth(&line_series(filings, item))?;
    Some(classify(indicator, growth, Signal::Buy, Signal::Sell))
}

/// Growth in share count dilutes holders and is a sell; buybacks are a buy.
pub fn evaluate_share_dilution(filings: &[FinancialFiling]) -> Option<IndicatorSignal> {
    let growth = compute_growth(&share_series(filings))?;
    Some(classify(Indicator::ShareDilution, growth, Signal::Sell, Signal::Buy))
}
