//! Short-side liquidity: short interest and daily short volume

pub mod short_interest;
pub mod short_volume;

pub use short_interest::*;
pub use short_volume::*;
