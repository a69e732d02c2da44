//! Per-indicator evaluators.
//!
//! Each evaluator is a pure function of already-fetched inputs and returns
//! `None` when its inputs are missing or unusable.

pub mod registry;

pub mod fundamental;
pub mod liquidity;
pub mod macd;
pub mod momentum;
pub mod structure;
pub mod trend;

pub use registry::*;
