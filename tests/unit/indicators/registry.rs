//! Unit tests for indicator naming and categories

use tickrank::indicators::registry::{indicators_where, IndicatorCategory};
use tickrank::models::Indicator;

#[test]
fn test_canonical_names_round_trip() {
    for indicator in Indicator::ALL {
        assert_eq!(Indicator::from_name(indicator.name()), Some(indicator));
    }
    assert_eq!(Indicator::from_name("52W"), Some(Indicator::Week52));
    assert_eq!(Indicator::from_name("nope"), None);
}

#[test]
fn test_serialized_name_matches_canonical_name() {
    let json = serde_json::to_string(&Indicator::DebtToEquity).unwrap();
    assert_eq!(json, "\"Debt/Equity\"");
    assert_eq!(Indicator::ShortVolume.pretty_name(), "Short Vol");
    assert_eq!(Indicator::Rsi.pretty_name(), "RSI");
}

#[test]
fn test_categories() {
    assert_eq!(Indicator::Macd.category(), IndicatorCategory::Oscillator);
    assert_eq!(Indicator::Week52.category(), IndicatorCategory::MarketStructure);
    assert_eq!(Indicator::ShareDilution.category(), IndicatorCategory::Growth);
    assert!(Indicator::NetMargin.is_fundamental());
    assert!(!Indicator::ShortInterest.is_fundamental());
}

#[test]
fn test_pools_partition_all_indicators() {
    let technical = indicators_where(false);
    let fundamental = indicators_where(true);
    assert_eq!(
        technical,
        vec![
            Indicator::Rsi,
            Indicator::Sma,
            Indicator::Ema,
            Indicator::Macd,
            Indicator::Week52,
            Indicator::ShortInterest,
            Indicator::ShortVolume,
        ]
    );
    assert_eq!(fundamental.len(), 13);
    assert_eq!(fundamental[0], Indicator::CurrentRatio);
}
