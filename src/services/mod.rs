//! External collaborators: market data, forecasting and posting.

pub mod market_data;
pub mod polygon;
pub mod posting;

pub use market_data::{MarketDataProvider, PriceForecaster};
pub use polygon::{PolygonMarketDataProvider, PolygonRestClient};
pub use posting::{LogPoster, SocialPoster, WebhookPoster};
