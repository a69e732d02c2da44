//! Shared builders for filings and results.
#![allow(dead_code)]

use chrono::NaiveDate;
use tickrank::models::{
    BalanceSheet, CashFlowStatement, ComprehensiveIncome, DataPoint, FinancialFiling, Financials,
    IncomeStatement, IndicatorSignal, TickerResult,
};

pub fn point(value: f64) -> Option<DataPoint> {
    Some(DataPoint::new(value))
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

pub fn filing(financials: Financials) -> FinancialFiling {
    FinancialFiling {
        financials: Some(financials),
        ..Default::default()
    }
}

pub fn balance_sheet(current_assets: f64, current_liabilities: f64, liabilities: f64, equity: f64) -> FinancialFiling {
    filing(Financials {
        balance_sheet: Some(BalanceSheet {
            current_assets: point(current_assets),
            current_liabilities: point(current_liabilities),
            liabilities: point(liabilities),
            equity: point(equity),
            ..Default::default()
        }),
        ..Default::default()
    })
}

pub fn income(revenues: f64, net_income: f64) -> FinancialFiling {
    filing(Financials {
        income_statement: Some(IncomeStatement {
            revenues: point(revenues),
            net_income_loss: point(net_income),
            ..Default::default()
        }),
        ..Default::default()
    })
}

pub fn cash_flows(operating: f64, net: f64, comprehensive: f64) -> FinancialFiling {
    filing(Financials {
        cash_flow_statement: Some(CashFlowStatement {
            net_cash_flow_from_operating_activities: point(operating),
            net_cash_flow: point(net),
        }),
        comprehensive_income: Some(ComprehensiveIncome {
            comprehensive_income_loss: point(comprehensive),
        }),
        ..Default::default()
    })
}

pub fn shares(count: f64) -> FinancialFiling {
    filing(Financials {
        balance_sheet: Some(BalanceSheet {
            common_stock_shares_outstanding: point(count),
            ..Default::default()
        }),
        ..Default::default()
    })
}

pub fn scored(symbol: &str, score: i64) -> TickerResult {
    TickerResult {
        symbol: symbol.to_string(),
        price: None,
        projected_price: None,
        signals: Vec::<IndicatorSignal>::new(),
        score,
    }
}

pub fn priced(symbol: &str, price: Option<f64>, projected: Option<f64>) -> TickerResult {
    TickerResult {
        price,
        projected_price: projected,
        ..scored(symbol, 0)
    }
}
