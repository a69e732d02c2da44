//! Unit tests for provider record decoding

use tickrank::models::{FinancialFiling, LineItem, MacdPoint, ShortVolume};

#[test]
fn test_filing_line_items_from_json() {
    let json = r#"{
        "end_date": "2024-03-31",
        "fiscal_period": "Q1",
        "financials": {
            "balance_sheet": {
                "current_assets": {"value": 300.0, "unit": "USD"},
                "current_liabilities": {"value": 100.0}
            },
            "income_statement": {
                "revenues": {"value": 1000.0},
                "net_income_loss": {"value": null}
            }
        }
    }"#;
    let filing: FinancialFiling = serde_json::from_str(json).unwrap();

    assert_eq!(filing.line(LineItem::CurrentAssets), Some(300.0));
    assert_eq!(filing.line(LineItem::Revenues), Some(1000.0));
    assert_eq!(filing.line(LineItem::NetIncome), None);
    assert_eq!(filing.line(LineItem::OperatingCashFlow), None);
    assert_eq!(filing.fiscal_period.as_deref(), Some("Q1"));
}

#[test]
fn test_shares_outstanding_fallback_order() {
    let balance: FinancialFiling = serde_json::from_str(
        r#"{"financials": {
            "balance_sheet": {"common_stock_shares_outstanding": {"value": 10.0}},
            "income_statement": {"weighted_average_shares_outstanding_basic": {"value": 20.0}}
        }, "shares_outstanding": 30.0}"#,
    )
    .unwrap();
    assert_eq!(balance.shares_outstanding(), Some(10.0));

    let diluted: FinancialFiling = serde_json::from_str(
        r#"{"financials": {
            "income_statement": {"weighted_average_shares_outstanding_diluted": {"value": 25.0}}
        }}"#,
    )
    .unwrap();
    assert_eq!(diluted.shares_outstanding(), Some(25.0));

    let wrapped: FinancialFiling =
        serde_json::from_str(r#"{"shares_outstanding": {"value": 40.0}}"#).unwrap();
    assert_eq!(wrapped.shares_outstanding(), Some(40.0));

    let bare: FinancialFiling = serde_json::from_str(r#"{"shares_outstanding": 50.0}"#).unwrap();
    assert_eq!(bare.shares_outstanding(), Some(50.0));

    let empty = FinancialFiling::default();
    assert_eq!(empty.shares_outstanding(), None);
}

#[test]
fn test_macd_point_accepts_short_timestamp_key() {
    let point: MacdPoint =
        serde_json::from_str(r#"{"t": 1700000000000, "value": 1.5, "signal": 1.0, "histogram": 0.5}"#)
            .unwrap();
    assert_eq!(point.timestamp, Some(1_700_000_000_000));
    assert_eq!(point.histogram, Some(0.5));
}

#[test]
fn test_short_volume_field_aliases() {
    let polygon: ShortVolume =
        serde_json::from_str(r#"{"short_volume": 40.0, "total_volume": 100.0}"#).unwrap();
    assert_eq!(polygon.short_volume, Some(40.0));
    assert_eq!(polygon.volume, Some(100.0));

    let camel: ShortVolume =
        serde_json::from_str(r#"{"shortVolume": 10.0, "volume": 50.0}"#).unwrap();
    assert_eq!(camel.short_volume, Some(10.0));
    assert_eq!(camel.volume, Some(50.0));
}
