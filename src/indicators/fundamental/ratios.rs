use crate::models::market::{FinancialFiling, LineItem};
use crate::models::signal::{Indicator, IndicatorSignal, Signal};
use crate::signals::scoring::{clamp_score, ratio};

fn line_ratio(
    filing: Option<&FinancialFiling>,
    numerator: LineItem,
    denominator: LineItem,
) -> Option<f64> {
    let filing = filing?;
    ratio(filing.line(numerator)?, filing.line(denominator)?)
}

/// Current assets over current liabilities. Above 1.5 is a buy, below 1 a sell.
pub fn evaluate_current_ratio(filing: Option<&FinancialFiling>) -> Option<IndicatorSignal> {
    let r = line_ratio(filing, LineItem::CurrentAssets, LineItem::CurrentLiabilities)?;
    let signal = if r > 1.5 {
        IndicatorSignal::new(Indicator::CurrentRatio, r, Signal::Buy, clamp_score((r - 1.5) * 50.0))
    } else if r < 1.0 {
        IndicatorSignal::new(Indicator::CurrentRatio, r, Signal::Sell, clamp_score((1.0 - r) * 100.0))
    } else {
        IndicatorSignal::hold(Indicator::CurrentRatio, r)
    };
    Some(signal)
}

/// Liabilities over equity. Below 1 is a buy, above 2 a sell.
pub fn evaluate_debt_to_equity(filing: Option<&FinancialFiling>) -> Option<IndicatorSignal> {
    let r = line_ratio(filing, LineItem::Liabilities, LineItem::Equity)?;
    let signal = if r < 1.0 {
        IndicatorSignal::new(Indicator::DebtToEquity, r, Signal::Buy, clamp_score((1.0 - r) * 100.0))
    } else if r > 2.0 {
        IndicatorSignal::new(Indicator::DebtToEquity, r, Signal::Sell, clamp_score((r - 2.0) * 50.0))
    } else {
        IndicatorSignal::hold(Indicator::DebtToEquity, r)
    };
    Some(signal)
}

/// Net income over revenues. Above 10% is a buy, any loss a sell.
pub fn evaluate_net_margin(filing: Option<&FinancialFiling>) -> Option<IndicatorSignal> {
    let margin = line_ratio(filing, LineItem::NetIncome, LineItem::Revenues)?;
    let signal = if margin > 0.1 {
        IndicatorSignal::new(Indicator::NetMargin, margin, Signal::Buy, clamp_score(margin * 1000.0))
    } else if margin < 0.0 {
        let score = clamp_score(margin.abs() * 1000.0);
        IndicatorSignal::new(Indicator::NetMargin, margin, Signal::Sell, score)
    } else {
        IndicatorSignal::hold(Indicator::NetMargin, margin)
    };
    Some(signal)
}
