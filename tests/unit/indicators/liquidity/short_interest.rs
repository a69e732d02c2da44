//! Unit tests for short interest evaluation

use tickrank::indicators::liquidity::{evaluate_short_interest, short_percent};
use tickrank::models::{Indicator, ShortInterest, Signal};

fn report(short_interest: Option<f64>, float: Option<f64>, days: Option<f64>) -> ShortInterest {
    ShortInterest {
        short_interest,
        float,
        days_to_cover: days,
    }
}

#[test]
fn test_heavy_shorting_sells() {
    let r = report(Some(40.0), None, None);
    let signal = evaluate_short_interest(Some(&r), Some(100.0)).unwrap();
    assert_eq!(signal.indicator, Indicator::ShortInterest);
    assert_eq!(signal.signal, Signal::Sell);
    assert_eq!(signal.score, 25);
}

#[test]
fn test_light_shorting_buys() {
    let r = report(Some(2.0), None, None);
    let signal = evaluate_short_interest(Some(&r), Some(100.0)).unwrap();
    assert_eq!(signal.signal, Signal::Buy);
    assert_eq!(signal.score, 60);
}

#[test]
fn test_float_used_without_shares_outstanding() {
    let r = report(Some(20.0), Some(200.0), Some(30.0));
    assert_eq!(short_percent(&r, None), Some(10.0));
    assert_eq!(short_percent(&r, Some(0.0)), Some(10.0));

    let signal = evaluate_short_interest(Some(&r), None).unwrap();
    assert_eq!(signal.signal, Signal::Hold);
    assert_eq!(signal.value, Some(10.0));
}

#[test]
fn test_days_to_cover_fallback() {
    let heavy = report(None, None, Some(10.0));
    let signal = evaluate_short_interest(Some(&heavy), None).unwrap();
    assert_eq!(signal.signal, Signal::Sell);
    assert_eq!(signal.score, 11);
    assert_eq!(signal.value, Some(10.0));

    let light = report(Some(5.0), None, Some(0.5));
    let signal = evaluate_short_interest(Some(&light), None).unwrap();
    assert_eq!(signal.signal, Signal::Buy);
    assert_eq!(signal.score, 50);

    let mid = report(None, None, Some(3.0));
    assert_eq!(
        evaluate_short_interest(Some(&mid), None).unwrap().signal,
        Signal::Hold
    );
}

#[test]
fn test_no_usable_measure_skips() {
    let empty = report(Some(10.0), None, None);
    assert!(evaluate_short_interest(Some(&empty), None).is_none());
    assert!(evaluate_short_interest(None, Some(100.0)).is_none());
}
