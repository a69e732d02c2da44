pub mod evaluation;
pub mod evaluator;

pub use evaluation::{CrossoverType, MacdEvaluation};
pub use evaluator::*;
