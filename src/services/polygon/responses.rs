//! Polygon response envelopes. Only the fields the provider reads are modeled.

use serde::Deserialize;

use crate::models::market::{finite, DailyBar, FinancialFiling};

/// `results` that some endpoints return as an object and others as an array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_first(self) -> Option<T> {
        match self {
            OneOrMany::Many(items) => items.into_iter().next(),
            OneOrMany::One(item) => Some(item),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ResultsEnvelope<T> {
    pub results: Option<OneOrMany<T>>,
}

impl<T> ResultsEnvelope<T> {
    pub fn first(self) -> Option<T> {
        self.results.and_then(OneOrMany::into_first)
    }
}

/// `/v1/indicators/*` body: `{"results": {"values": [...]}}`.
#[derive(Debug, Deserialize)]
pub struct IndicatorResponse<T> {
    pub results: Option<IndicatorResults<T>>,
}

#[derive(Debug, Deserialize)]
pub struct IndicatorResults<T> {
    pub values: Option<Vec<T>>,
}

impl<T> IndicatorResponse<T> {
    pub fn into_values(self) -> Vec<T> {
        self.results.and_then(|r| r.values).unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub struct AggsResponse {
    #[serde(default)]
    pub results: Option<Vec<DailyBar>>,
}

#[derive(Debug, Deserialize)]
pub struct FinancialsResponse {
    #[serde(default)]
    pub results: Option<Vec<FinancialFiling>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TickerOverview {
    #[serde(default)]
    pub shares_outstanding: Option<f64>,
    #[serde(default)]
    pub outstanding_shares: Option<f64>,
    #[serde(default)]
    pub share_class_shares_outstanding: Option<f64>,
    #[serde(default)]
    pub total_shares: Option<f64>,
}

impl TickerOverview {
    /// First finite, positive share count among the fields Polygon has used.
    pub fn shares(&self) -> Option<f64> {
        [
            self.shares_outstanding,
            self.outstanding_shares,
            self.share_class_shares_outstanding,
            self.total_shares,
        ]
        .into_iter()
        .find_map(|v| finite(v).filter(|s| *s > 0.0))
    }
}

#[derive(Debug, Deserialize)]
pub struct TickerDetailsResponse {
    #[serde(default)]
    pub results: Option<TickerOverview>,
}
