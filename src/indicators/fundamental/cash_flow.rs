use crate::models::market::{FinancialFiling, LineItem};
use crate::models::signal::{Indicator, IndicatorSignal, Signal};
use crate::signals::scoring::clamp_score;

/// One score point per million of currency.
const SCORE_UNIT: f64 = 1e6;

/// Sign of a reported amount decides the direction, its size in millions the score.
pub fn evaluate_magnitude(indicator: Indicator, amount: Option<f64>) -> Option<IndicatorSignal> {
    let amount = amount.filter(|v| v.is_finite())?;
    let score = clamp_score(amount.abs() / SCORE_UNIT);

    let signal = if amount > 0.0 {
        IndicatorSignal::new(indicator, amount, Signal::Buy, score)
    } else if amount < 0.0 {
        IndicatorSignal::new(indicator, amount, Signal::Sell, score)
    } else {
        IndicatorSignal::hold(indicator, amount)
    };
    Some(signal)
}

pub fn evaluate_operating_cash_flow(filing: Option<&FinancialFiling>) -> Option<IndicatorSignal> {
    evaluate_magnitude(
        Indicator::OperatingCashFlow,
        filing?.line(LineItem::OperatingCashFlow),
    )
}

pub fn evaluate_net_cash_flow(filing: Option<&FinancialFiling>) -> Option<IndicatorSignal> {
    evaluate_magnitude(Indicator::NetCashFlow, filing?.line(LineItem::NetCashFlow))
}

pub fn evaluate_comprehensive_income(filing: Option<&FinancialFiling>) -> Option<IndicatorSignal> {
    evaluate_magnitude(
        Indicator::ComprehensiveIncome,
        filing?.line(LineItem::ComprehensiveIncome),
    )
}
