use crate::models::market::{finite, ShortVolume};
use crate::models::signal::{Indicator, IndicatorSignal, Signal};
use crate::signals::scoring::clamp_score;

const HIGH_RATIO: f64 = 0.4;
const LOW_RATIO: f64 = 0.2;

/// Share of the day's volume that was short sold.
pub fn short_volume_ratio(report: &ShortVolume) -> Option<f64> {
    let short = finite(report.short_volume)?;
    let total = finite(report.volume).filter(|v| *v > 0.0)?;
    Some(short / total)
}

pub fn evaluate_short_volume(report: Option<&ShortVolume>) -> Option<IndicatorSignal> {
    let ratio = short_volume_ratio(report?)?;

    let signal = if ratio > HIGH_RATIO {
        let score = clamp_score((ratio - HIGH_RATIO) / (1.0 - HIGH_RATIO) * 100.0);
        IndicatorSignal::new(Indicator::ShortVolume, ratio, Signal::Sell, score)
    } else if ratio < LOW_RATIO {
        let score = clamp_score((LOW_RATIO - ratio) / LOW_RATIO * 100.0);
        IndicatorSignal::new(Indicator::ShortVolume, ratio, Signal::Buy, score)
    } else {
        IndicatorSignal::hold(Indicator::ShortVolume, ratio)
    };

    Some(signal)
}
