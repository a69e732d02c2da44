//! Unit tests for SMA/EMA evaluation

use tickrank::indicators::trend::{evaluate_ema, evaluate_sma};
use tickrank::models::{Indicator, Signal};

#[test]
fn test_price_above_sma_buys() {
    let signal = evaluate_sma(Some(100.0), Some(110.0)).unwrap();
    assert_eq!(signal.indicator, Indicator::Sma);
    assert_eq!(signal.signal, Signal::Buy);
    assert_eq!(signal.score, 10);
    assert_eq!(signal.value, Some(100.0));
}

#[test]
fn test_price_below_ema_sells() {
    let signal = evaluate_ema(Some(100.0), Some(90.0)).unwrap();
    assert_eq!(signal.indicator, Indicator::Ema);
    assert_eq!(signal.signal, Signal::Sell);
    assert_eq!(signal.score, 10);
}

#[test]
fn test_price_within_band_holds() {
    let signal = evaluate_sma(Some(100.0), Some(100.05)).unwrap();
    assert_eq!(signal.signal, Signal::Hold);
    assert_eq!(signal.score, 0);
}

#[test]
fn test_large_gap_caps_score() {
    let signal = evaluate_sma(Some(100.0), Some(300.0)).unwrap();
    assert_eq!(signal.score, 100);
}

#[test]
fn test_unusable_inputs_skip() {
    assert!(evaluate_sma(Some(0.0), Some(100.0)).is_none());
    assert!(evaluate_sma(None, Some(100.0)).is_none());
    assert!(evaluate_ema(Some(100.0), None).is_none());
    assert!(evaluate_ema(Some(100.0), Some(f64::NAN)).is_none());
}
