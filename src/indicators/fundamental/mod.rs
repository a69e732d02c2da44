//! Fundamentals from financial filings.
//!
//! Ratios and cash-flow magnitudes read the newest quarterly filing only.
//! Growth evaluators compare the newest and oldest usable filings of a series.

pub mod cash_flow;
pub mod growth;
pub mod ratios;

pub use cash_flow::*;
pub use growth::*;
pub use ratios::*;
