use crate::models::market::{finite, HighLow};
use crate::models::signal::{Indicator, IndicatorSignal, Signal};
use crate::signals::scoring::clamp_score;

/// Within this many percent of an extreme counts as "at" it.
pub const EXTREME_THRESHOLD_PCT: f64 = 1.0;
/// Within this many percent earns the proximity bonus.
pub const PROXIMITY_BONUS_PCT: f64 = 0.25;
const PROXIMITY_BONUS: f64 = 10.0;

fn proximity_score(distance_pct: f64) -> u8 {
    let closeness = (1.0 - distance_pct / EXTREME_THRESHOLD_PCT).max(0.0);
    let mut raw = (closeness * 100.0).round();
    if distance_pct <= PROXIMITY_BONUS_PCT {
        raw += PROXIMITY_BONUS;
    }
    clamp_score(raw)
}

/// Price at the 52-week high is a sell (take profits), at the low a buy.
///
/// The high is checked first, so a degenerate range where both apply sells.
pub fn evaluate_week_range(range: Option<HighLow>, price: Option<f64>) -> Option<IndicatorSignal> {
    let HighLow { high, low } = range?;
    if !(high.is_finite() && low.is_finite() && high > 0.0 && low > 0.0) {
        return None;
    }
    let price = finite(price).filter(|p| *p > 0.0)?;

    let below_high_pct = (high - price) / high * 100.0;
    if below_high_pct <= EXTREME_THRESHOLD_PCT {
        let score = proximity_score(below_high_pct);
        return Some(IndicatorSignal::new(Indicator::Week52, high, Signal::Sell, score));
    }

    let above_low_pct = (price - low) / low * 100.0;
    if above_low_pct <= EXTREME_THRESHOLD_PCT {
        let score = proximity_score(above_low_pct);
        return Some(IndicatorSignal::new(Indicator::Week52, low, Signal::Buy, score));
    }

    Some(IndicatorSignal::hold(Indicator::Week52, price))
}
