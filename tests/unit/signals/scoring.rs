//! Unit tests for scoring helpers

use tickrank::signals::scoring::{capped, clamp_score, percent_diff, ratio};

#[test]
fn test_clamp_score_rounds_then_clamps() {
    assert_eq!(clamp_score(16.6), 17);
    assert_eq!(clamp_score(12.5), 13);
    assert_eq!(clamp_score(130.0), 100);
    assert_eq!(clamp_score(-5.0), 0);
    assert_eq!(clamp_score(f64::NAN), 0);
    assert_eq!(clamp_score(f64::INFINITY), 100);
}

#[test]
fn test_capped_keeps_float() {
    assert_eq!(capped(59.6), 60.0);
    assert_eq!(capped(250.0), 100.0);
}

#[test]
fn test_ratio_guards() {
    assert_eq!(ratio(3.0, 2.0), Some(1.5));
    assert_eq!(ratio(3.0, 0.0), None);
    assert_eq!(ratio(f64::INFINITY, 2.0), None);
    assert_eq!(percent_diff(110.0, 100.0), Some(10.0));
    assert_eq!(percent_diff(110.0, 0.0), None);
}
