//! SMA / EMA trend-following evaluation

use crate::models::market::finite;
use crate::models::signal::{Indicator, IndicatorSignal, Signal};
use crate::signals::scoring::{clamp_score, percent_diff};

/// Price within this many percent of the average is a hold.
pub const HOLD_BAND_PCT: f64 = 0.1;

/// Compare the latest price against a moving average.
///
/// Price above the average is a buy, below is a sell. The score is the
/// absolute percentage gap. The reported value is the average itself.
pub fn evaluate_moving_average(
    indicator: Indicator,
    average: Option<f64>,
    price: Option<f64>,
) -> Option<IndicatorSignal> {
    let average = finite(average)?;
    let price = finite(price)?;
    let diff_pct = percent_diff(price, average)?;

    let signal = if diff_pct.abs() < HOLD_BAND_PCT {
        IndicatorSignal::hold(indicator, average)
    } else {
        let direction = if diff_pct > 0.0 { Signal::Buy } else { Signal::Sell };
        IndicatorSignal::new(indicator, average, direction, clamp_score(diff_pct.abs()))
    };

    Some(signal)
}

pub fn evaluate_sma(sma: Option<f64>, price: Option<f64>) -> Option<IndicatorSignal> {
    evaluate_moving_average(Indicator::Sma, sma, price)
}

pub fn evaluate_ema(ema: Option<f64>, price: Option<f64>) -> Option<IndicatorSignal> {
    evaluate_moving_average(Indicator::Ema, ema, price)
}
