//! Market structure: position within the trailing 52-week range

pub mod week_range;

pub use week_range::*;
