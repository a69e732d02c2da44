//! Market and fundamental records supplied by a [`MarketDataProvider`].
//!
//! Every numeric field is optional: providers omit values freely and the
//! evaluators treat a missing or non-finite reading as "skip this indicator".
//!
//! [`MarketDataProvider`]: crate::services::market_data::MarketDataProvider

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Keep a reading only if it is present and finite.
pub fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Daily open/close summary for one session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpenClose {
    #[serde(default)]
    pub open: Option<f64>,
    #[serde(default)]
    pub high: Option<f64>,
    #[serde(default)]
    pub low: Option<f64>,
    #[serde(default)]
    pub close: Option<f64>,
    #[serde(default)]
    pub volume: Option<f64>,
}

/// A single-valued technical indicator reading (SMA, EMA, RSI).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorValue {
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub value: Option<f64>,
}

/// One point of a MACD series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MacdPoint {
    #[serde(default, alias = "t")]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub signal: Option<f64>,
    #[serde(default)]
    pub histogram: Option<f64>,
}

impl MacdPoint {
    pub fn new(timestamp: i64, value: f64, signal: f64, histogram: f64) -> Self {
        Self {
            timestamp: Some(timestamp),
            value: Some(value),
            signal: Some(signal),
            histogram: Some(histogram),
        }
    }
}

/// Trailing 52-week price extremes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighLow {
    pub high: f64,
    pub low: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShortInterest {
    #[serde(default)]
    pub short_interest: Option<f64>,
    #[serde(default)]
    pub float: Option<f64>,
    #[serde(default)]
    pub days_to_cover: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShortVolume {
    #[serde(default, alias = "shortVolume")]
    pub short_volume: Option<f64>,
    #[serde(default, alias = "total_volume")]
    pub volume: Option<f64>,
}

/// Daily aggregate bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    #[serde(rename = "t")]
    pub timestamp: i64,
    #[serde(rename = "o", default)]
    pub open: Option<f64>,
    #[serde(rename = "h", default)]
    pub high: Option<f64>,
    #[serde(rename = "l", default)]
    pub low: Option<f64>,
    #[serde(rename = "c", default)]
    pub close: Option<f64>,
    #[serde(rename = "v", default)]
    pub volume: Option<f64>,
}

/// Filing cadence for financial statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Quarterly,
    Annual,
}

impl Timeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Quarterly => "quarterly",
            Timeframe::Annual => "annual",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `{ "value": n }` wrapper around a statement line item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    #[serde(default)]
    pub value: Option<f64>,
}

impl DataPoint {
    pub fn new(value: f64) -> Self {
        Self { value: Some(value) }
    }
}

fn read(item: &Option<DataPoint>) -> Option<f64> {
    finite(item.as_ref().and_then(|d| d.value))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheet {
    #[serde(default)]
    pub current_assets: Option<DataPoint>,
    #[serde(default)]
    pub current_liabilities: Option<DataPoint>,
    #[serde(default)]
    pub liabilities: Option<DataPoint>,
    #[serde(default)]
    pub equity: Option<DataPoint>,
    #[serde(default)]
    pub common_stock_shares_outstanding: Option<DataPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncomeStatement {
    #[serde(default)]
    pub revenues: Option<DataPoint>,
    #[serde(default)]
    pub net_income_loss: Option<DataPoint>,
    #[serde(default)]
    pub weighted_average_shares_outstanding_basic: Option<DataPoint>,
    #[serde(default)]
    pub weighted_average_shares_outstanding_diluted: Option<DataPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashFlowStatement {
    #[serde(default)]
    pub net_cash_flow_from_operating_activities: Option<DataPoint>,
    #[serde(default)]
    pub net_cash_flow: Option<DataPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComprehensiveIncome {
    #[serde(default)]
    pub comprehensive_income_loss: Option<DataPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Financials {
    #[serde(default)]
    pub balance_sheet: Option<BalanceSheet>,
    #[serde(default)]
    pub income_statement: Option<IncomeStatement>,
    #[serde(default)]
    pub cash_flow_statement: Option<CashFlowStatement>,
    #[serde(default)]
    pub comprehensive_income: Option<ComprehensiveIncome>,
}

/// Top-level share count, which providers report either bare or wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SharesField {
    Wrapped(DataPoint),
    Bare(f64),
}

impl SharesField {
    pub fn value(&self) -> Option<f64> {
        match self {
            SharesField::Wrapped(point) => finite(point.value),
            SharesField::Bare(value) => finite(Some(*value)),
        }
    }
}

/// Statement line items the evaluators read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineItem {
    CurrentAssets,
    CurrentLiabilities,
    Liabilities,
    Equity,
    Revenues,
    NetIncome,
    OperatingCashFlow,
    NetCashFlow,
    ComprehensiveIncome,
}

/// One financial filing (a quarter or a fiscal year).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialFiling {
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub fiscal_period: Option<String>,
    #[serde(default)]
    pub fiscal_year: Option<String>,
    #[serde(default)]
    pub financials: Option<Financials>,
    #[serde(default)]
    pub shares_outstanding: Option<SharesField>,
}

impl FinancialFiling {
    /// Finite value of a line item, or `None` when any level of nesting is absent.
    pub fn line(&self, item: LineItem) -> Option<f64> {
        let fin = self.financials.as_ref()?;
        match item {
            LineItem::CurrentAssets => read(&fin.balance_sheet.as_ref()?.current_assets),
            LineItem::CurrentLiabilities => {
                read(&fin.balance_sheet.as_ref()?.current_liabilities)
            }
            LineItem::Liabilities => read(&fin.balance_sheet.as_ref()?.liabilities),
            LineItem::Equity => read(&fin.balance_sheet.as_ref()?.equity),
            LineItem::Revenues => read(&fin.income_statement.as_ref()?.revenues),
            LineItem::NetIncome => read(&fin.income_statement.as_ref()?.net_income_loss),
            LineItem::OperatingCashFlow => read(
                &fin.cash_flow_statement
                    .as_ref()?
                    .net_cash_flow_from_operating_activities,
            ),
            LineItem::NetCashFlow => read(&fin.cash_flow_statement.as_ref()?.net_cash_flow),
            LineItem::ComprehensiveIncome => {
                read(&fin.comprehensive_income.as_ref()?.comprehensive_income_loss)
            }
        }
    }

    /// Share count for dilution tracking, trying the most specific source first.
    pub fn shares_outstanding(&self) -> Option<f64> {
        let fin = self.financials.as_ref();
        let balance = fin.and_then(|f| f.balance_sheet.as_ref());
        let income = fin.and_then(|f| f.income_statement.as_ref());

        balance
            .and_then(|b| read(&b.common_stock_shares_outstanding))
            .or_else(|| income.and_then(|i| read(&i.weighted_average_shares_outstanding_basic)))
            .or_else(|| income.and_then(|i| read(&i.weighted_average_shares_outstanding_diluted)))
            .or_else(|| self.shares_outstanding.and_then(|s| s.value()))
    }
}
