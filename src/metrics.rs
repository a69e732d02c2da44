//! Prometheus metrics shared by the server and the report runtime.

use prometheus::{Encoder, Histogram, HistogramOpts, IntCounter, IntGauge, Registry, TextEncoder};

pub struct Metrics {
    registry: Registry,
    pub http_requests_total: IntCounter,
    pub http_request_duration_seconds: Histogram,
    pub http_requests_in_flight: IntGauge,
    pub tickers_evaluated_total: IntCounter,
    pub ticker_failures_total: IntCounter,
    pub provider_fetch_failures_total: IntCounter,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total =
            IntCounter::new("http_requests_total", "Total number of HTTP requests")?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
        ))?;
        let http_requests_in_flight =
            IntGauge::new("http_requests_in_flight", "HTTP requests currently being served")?;
        let tickers_evaluated_total = IntCounter::new(
            "tickers_evaluated_total",
            "Tickers that completed a fetch and evaluation pass",
        )?;
        let ticker_failures_total = IntCounter::new(
            "ticker_failures_total",
            "Tickers dropped from a report because no data could be fetched",
        )?;
        let provider_fetch_failures_total = IntCounter::new(
            "provider_fetch_failures_total",
            "Individual market data fetches that failed",
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(tickers_evaluated_total.clone()))?;
        registry.register(Box::new(ticker_failures_total.clone()))?;
        registry.register(Box::new(provider_fetch_failures_total.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            http_requests_in_flight,
            tickers_evaluated_total,
            ticker_failures_total,
            provider_fetch_failures_total,
        })
    }

    /// Render all metrics in the Prometheus text format.
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
