//! Polygon.io REST integration

pub mod client;
pub mod provider;
pub mod responses;

pub use client::PolygonRestClient;
pub use provider::PolygonMarketDataProvider;
