//! Signal evaluation, aggregation and ranking.

pub mod aggregation;
pub mod engine;
pub mod ranking;
pub mod scoring;

pub use aggregation::*;
pub use engine::SignalEngine;
pub use ranking::*;
pub use scoring::*;
