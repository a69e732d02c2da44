//! Runs every evaluator over one ticker's inputs.

use crate::indicators::fundamental::{
    evaluate_comprehensive_income, evaluate_current_ratio, evaluate_debt_to_equity,
    evaluate_growth, evaluate_net_cash_flow, evaluate_net_margin, evaluate_operating_cash_flow,
    evaluate_share_dilution,
};
use crate::indicators::liquidity::{evaluate_short_interest, evaluate_short_volume};
use crate::indicators::macd::evaluate_macd;
use crate::indicators::momentum::evaluate_rsi;
use crate::indicators::structure::evaluate_week_range;
use crate::indicators::trend::{evaluate_ema, evaluate_sma};
use crate::models::market::LineItem;
use crate::models::signal::{Indicator, IndicatorSignal};
use crate::models::ticker::TickerInputs;

pub struct SignalEngine;

impl SignalEngine {
    /// Evaluate all indicators in their fixed order, skipping any whose
    /// inputs are absent. Depends only on `inputs`.
    pub fn evaluate(inputs: &TickerInputs) -> Vec<IndicatorSignal> {
        let latest_quarter = inputs.quarterly.first();
        let q = inputs.quarterly.as_slice();
        let y = inputs.annual.as_slice();

        [
            evaluate_rsi(inputs.rsi),
            evaluate_sma(inputs.sma, inputs.price),
            evaluate_week_range(inputs.high_low, inputs.price),
            evaluate_short_interest(inputs.short_interest.as_ref(), inputs.shares_outstanding),
            evaluate_short_volume(inputs.short_volume.as_ref()),
            evaluate_ema(inputs.ema, inputs.price),
            evaluate_macd(&inputs.macd),
            evaluate_current_ratio(latest_quarter),
            evaluate_debt_to_equity(latest_quarter),
            evaluate_net_margin(latest_quarter),
            evaluate_operating_cash_flow(latest_quarter),
            evaluate_net_cash_flow(latest_quarter),
            evaluate_comprehensive_income(latest_quarter),
            evaluate_growth(Indicator::RevenueGrowthQuarterly, q, LineItem::Revenues),
            evaluate_growth(Indicator::RevenueGrowthAnnual, y, LineItem::Revenues),
            evaluate_growth(Indicator::NetIncomeGrowthQuarterly, q, LineItem::NetIncome),
            evaluate_growth(Indicator::NetIncomeGrowthAnnual, y, LineItem::NetIncome),
            evaluate_growth(Indicator::OpCashFlowGrowthQuarterly, q, LineItem::OperatingCashFlow),
            evaluate_growth(Indicator::OpCashFlowGrowthAnnual, y, LineItem::OperatingCashFlow),
            evaluate_share_dilution(q),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
