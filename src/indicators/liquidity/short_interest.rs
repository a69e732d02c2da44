use crate::models::market::{finite, ShortInterest};
use crate::models::signal::{Indicator, IndicatorSignal, Signal};
use crate::signals::scoring::clamp_score;

const HIGH_SHORT_PCT: f64 = 20.0;
const LOW_SHORT_PCT: f64 = 5.0;
const HIGH_DAYS_TO_COVER: f64 = 5.0;
const LOW_DAYS_TO_COVER: f64 = 1.0;
/// Days to cover above the high threshold saturate at this many.
const MAX_DAYS_TO_COVER: f64 = 50.0;

/// Shorted shares as a percentage of shares outstanding, else of the float.
pub fn short_percent(report: &ShortInterest, shares_outstanding: Option<f64>) -> Option<f64> {
    let shorted = finite(report.short_interest)?;
    let base = finite(shares_outstanding)
        .filter(|s| *s > 0.0)
        .or_else(|| finite(report.float).filter(|f| *f > 0.0))?;
    Some(shorted / base * 100.0)
}

fn from_percent(pct: f64) -> IndicatorSignal {
    if pct > HIGH_SHORT_PCT {
        let score = clamp_score((pct - HIGH_SHORT_PCT) / (100.0 - HIGH_SHORT_PCT) * 100.0);
        IndicatorSignal::new(Indicator::ShortInterest, pct, Signal::Sell, score)
    } else if pct < LOW_SHORT_PCT {
        let score = clamp_score((LOW_SHORT_PCT - pct) / LOW_SHORT_PCT * 100.0);
        IndicatorSignal::new(Indicator::ShortInterest, pct, Signal::Buy, score)
    } else {
        IndicatorSignal::hold(Indicator::ShortInterest, pct)
    }
}

fn from_days_to_cover(days: f64) -> IndicatorSignal {
    if days > HIGH_DAYS_TO_COVER {
        let span = MAX_DAYS_TO_COVER - HIGH_DAYS_TO_COVER;
        let score = clamp_score((days - HIGH_DAYS_TO_COVER) / span * 100.0);
        IndicatorSignal::new(Indicator::ShortInterest, days, Signal::Sell, score)
    } else if days < LOW_DAYS_TO_COVER {
        let score = clamp_score((LOW_DAYS_TO_COVER - days) * 100.0);
        IndicatorSignal::new(Indicator::ShortInterest, days, Signal::Buy, score)
    } else {
        IndicatorSignal::hold(Indicator::ShortInterest, days)
    }
}

/// Heavy shorting is bearish, light shorting bullish.
///
/// Uses the short percentage when a share base is known; otherwise falls back
/// to days to cover. The reported value is whichever measure was used.
pub fn evaluate_short_interest(
    report: Option<&ShortInterest>,
    shares_outstanding: Option<f64>,
) -> Option<IndicatorSignal> {
    let report = report?;
    match short_percent(report, shares_outstanding) {
        Some(pct) => Some(from_percent(pct)),
        None => finite(report.days_to_cover).map(from_days_to_cover),
    }
}
