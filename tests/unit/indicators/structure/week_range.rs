//! Unit tests for 52-week range evaluation

use tickrank::indicators::structure::evaluate_week_range;
use tickrank::models::{HighLow, Signal};

fn range(high: f64, low: f64) -> Option<HighLow> {
    Some(HighLow { high, low })
}

#[test]
fn test_above_high_sells_at_full_score() {
    let signal = evaluate_week_range(range(100.0, 50.0), Some(100.2)).unwrap();
    assert_eq!(signal.signal, Signal::Sell);
    assert_eq!(signal.score, 100);
    assert_eq!(signal.value, Some(100.0));
}

#[test]
fn test_near_high_scales_with_closeness() {
    let signal = evaluate_week_range(range(100.0, 50.0), Some(99.5)).unwrap();
    assert_eq!(signal.signal, Signal::Sell);
    assert_eq!(signal.score, 50);

    let bonus = evaluate_week_range(range(100.0, 50.0), Some(99.8)).unwrap();
    assert_eq!(bonus.score, 90);
}

#[test]
fn test_near_low_buys() {
    let signal = evaluate_week_range(range(100.0, 50.0), Some(50.25)).unwrap();
    assert_eq!(signal.signal, Signal::Buy);
    assert_eq!(signal.score, 50);
    assert_eq!(signal.value, Some(50.0));
}

#[test]
fn test_mid_range_holds_with_price_value() {
    let signal = evaluate_week_range(range(100.0, 50.0), Some(75.0)).unwrap();
    assert_eq!(signal.signal, Signal::Hold);
    assert_eq!(signal.value, Some(75.0));
}

#[test]
fn test_degenerate_range_prefers_high() {
    let signal = evaluate_week_range(range(100.0, 100.0), Some(100.0)).unwrap();
    assert_eq!(signal.signal, Signal::Sell);
}

#[test]
fn test_invalid_range_or_price_skips() {
    assert!(evaluate_week_range(range(100.0, 0.0), Some(75.0)).is_none());
    assert!(evaluate_week_range(range(f64::NAN, 50.0), Some(75.0)).is_none());
    assert!(evaluate_week_range(None, Some(75.0)).is_none());
    assert!(evaluate_week_range(range(100.0, 50.0), None).is_none());
}
