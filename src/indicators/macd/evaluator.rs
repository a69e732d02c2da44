use crate::indicators::macd::evaluation::{CrossoverType, MacdEvaluation};
use crate::models::market::{finite, MacdPoint};
use crate::models::signal::{Indicator, IndicatorSignal, MacdDetail, Signal};
use crate::signals::scoring::{capped, clamp_score};

/// Number of newest points considered.
pub const LOOKBACK: usize = 5;
/// A histogram closer to zero than this carries no information.
const FLAT_HISTOGRAM: f64 = 0.001;
const CROSS_BONUS: f64 = 20.0;
const DEPTH_WEIGHT: f64 = 0.6;
const APPROACH_WEIGHT: f64 = 0.4;

/// Newest-first window of at most [`LOOKBACK`] points. Missing timestamps sort as 0.
pub fn recent_window(series: &[MacdPoint]) -> Vec<&MacdPoint> {
    let mut sorted: Vec<&MacdPoint> = series.iter().collect();
    sorted.sort_by_key(|p| std::cmp::Reverse(p.timestamp.unwrap_or(0)));
    sorted.truncate(LOOKBACK);
    sorted
}

/// Build the intermediate readings for a window, or `None` when the newest
/// point lacks any of its MACD, signal or histogram values.
pub fn analyze_window(window: &[&MacdPoint]) -> Option<MacdEvaluation> {
    let newest = window.first()?;
    let histogram_value = finite(newest.histogram)?;
    let macd_value = finite(newest.value)?;
    let signal_value = finite(newest.signal)?;

    let hist: Vec<Option<f64>> = window.iter().map(|p| finite(p.histogram)).collect();
    let diffs: Vec<Option<f64>> = window
        .iter()
        .map(|p| Some(finite(p.value)? - finite(p.signal)?))
        .collect();

    let histogram_min = hist.iter().flatten().copied().fold(f64::INFINITY, f64::min);
    let histogram_min_index = hist
        .iter()
        .position(|h| *h == Some(histogram_min))
        .unwrap_or(0);

    let previous_hist = hist.get(1).copied().flatten();
    let previous_macd = window.get(1).and_then(|p| finite(p.value));
    let distance = macd_value - signal_value;
    let previous_distance = diffs.get(1).copied().flatten();

    let histogram_rising = previous_hist.is_some_and(|prev| histogram_value > prev);
    let approaching_signal = previous_distance
        .is_some_and(|prev| prev.abs() > distance.abs() && distance > prev);

    Some(MacdEvaluation {
        macd_value,
        signal_value,
        histogram_value,
        distance,
        previous_distance: previous_distance.unwrap_or(f64::NAN),
        histogram_min,
        histogram_min_index,
        histogram_rising,
        approaching_signal,
        macd_crossover: previous_macd
            .map_or(CrossoverType::None, |prev| CrossoverType::between(macd_value, prev)),
        histogram_crossover: previous_hist
            .map_or(CrossoverType::None, |prev| CrossoverType::between(histogram_value, prev)),
    })
}

/// Confidence before direction is decided.
///
/// Base is the histogram magnitude; a bottoming setup blends bottom depth with
/// how much the MACD/signal gap shrank. Any zero-line cross adds a bonus.
pub fn calculate_score(eval: &MacdEvaluation) -> u8 {
    let mut score = capped(eval.histogram_value.abs() * 100.0);

    if eval.is_bottoming() {
        let depth = capped(eval.histogram_min.abs() * 100.0);
        let prev = eval.previous_distance.abs();
        let improvement = if prev.is_finite() && prev > 0.0 {
            capped((prev - eval.distance.abs()) / prev * 100.0)
        } else {
            0.0
        };
        score = capped(depth * DEPTH_WEIGHT + improvement * APPROACH_WEIGHT);
    }

    if eval.has_cross() {
        score = (score + CROSS_BONUS).min(100.0);
    }

    clamp_score(score)
}

/// Directional call, checked in priority order: trend-confirmed or crossed
/// up, then bottoming below the signal line, then trend-confirmed or crossed down.
pub fn decide(eval: &MacdEvaluation) -> Signal {
    if (eval.histogram_value > 0.0 && eval.distance > 0.0) || eval.has_bullish_cross() {
        Signal::Buy
    } else if eval.is_bottoming() && eval.distance <= 0.0 {
        Signal::Buy
    } else if (eval.histogram_value < 0.0 && eval.distance < 0.0) || eval.has_bearish_cross() {
        Signal::Sell
    } else {
        Signal::Hold
    }
}

/// Evaluate a MACD series (any order) into a single signal.
pub fn evaluate_macd(series: &[MacdPoint]) -> Option<IndicatorSignal> {
    let window = recent_window(series);
    let eval = analyze_window(&window)?;

    let detail = MacdDetail {
        value: eval.macd_value,
        signal: eval.signal_value,
        histogram: eval.histogram_value,
    };

    let result = if eval.histogram_value.abs() < FLAT_HISTOGRAM {
        IndicatorSignal::hold(Indicator::Macd, eval.macd_value)
    } else {
        IndicatorSignal::new(Indicator::Macd, eval.macd_value, decide(&eval), calculate_score(&eval))
    };

    Some(result.with_macd(detail))
}
