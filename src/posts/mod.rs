//! Short text posts rendered from ticker snapshots.

pub mod formatter;

pub use formatter::*;
