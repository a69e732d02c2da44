//! Daily stock signal ranking.
//!
//! Fetches market and fundamental data per ticker, turns each indicator into a
//! scored buy/sell/hold call, aggregates the calls into one score per ticker and
//! ranks the tickers.

pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod posts;
pub mod services;
pub mod signals;

pub use error::{AppError, Result};
