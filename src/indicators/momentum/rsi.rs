//! RSI (Relative Strength Index) evaluation

use crate::models::market::finite;
use crate::models::signal::{Indicator, IndicatorSignal, Signal};
use crate::signals::scoring::clamp_score;

pub const OVERSOLD: f64 = 30.0;
pub const OVERBOUGHT: f64 = 70.0;

/// Evaluate the latest RSI reading.
///
/// Below 30 is oversold (buy), above 70 overbought (sell); the score grows
/// linearly with the distance past the threshold, saturating at the 0/100 ends.
pub fn evaluate_rsi(rsi: Option<f64>) -> Option<IndicatorSignal> {
    let rsi = finite(rsi)?;

    let signal = if rsi > OVERBOUGHT {
        let score = clamp_score((rsi - OVERBOUGHT) / (100.0 - OVERBOUGHT) * 100.0);
        IndicatorSignal::new(Indicator::Rsi, rsi, Signal::Sell, score)
    } else if rsi < OVERSOLD {
        let score = clamp_score((OVERSOLD - rsi) / OVERSOLD * 100.0);
        IndicatorSignal::new(Indicator::Rsi, rsi, Signal::Buy, score)
    } else {
        IndicatorSignal::hold(Indicator::Rsi, rsi)
    };

    Some(signal)
}
