//! Shared data models spanning the engine layers.

pub mod market;
pub mod signal;
pub mod ticker;

pub use market::{
    finite, BalanceSheet, CashFlowStatement, ComprehensiveIncome, DailyBar, DataPoint,
    FinancialFiling, Financials, HighLow, IncomeStatement, IndicatorValue, LineItem, MacdPoint,
    OpenClose, SharesField, ShortInterest, ShortVolume, Timeframe,
};
pub use signal::{Indicator, IndicatorSignal, MacdDetail, Signal};
pub use ticker::{Snapshot, TickerInputs, TickerResult};
