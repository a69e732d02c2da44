//! Cross-ticker ranking by aggregate score and by projected price change.

use crate::models::market::finite;
use crate::models::ticker::TickerResult;
use serde::Serialize;

/// Tickers ordered by aggregate score, partitioned into buy and sell candidates.
#[derive(Debug, Clone, Serialize)]
pub struct Ranking<'a> {
    /// Every ticker, score descending. Equal scores keep input order.
    pub ordered: Vec<&'a TickerResult>,
    /// Strictly positive scores, best first.
    pub buy: Vec<&'a TickerResult>,
    /// Strictly negative scores, worst first.
    pub sell: Vec<&'a TickerResult>,
}

impl<'a> Ranking<'a> {
    pub fn new(results: &'a [TickerResult]) -> Self {
        let mut ordered: Vec<&TickerResult> = results.iter().collect();
        ordered.sort_by(|a, b| b.score.cmp(&a.score));

        let buy = ordered.iter().copied().filter(|r| r.score > 0).collect();
        let mut sell: Vec<&TickerResult> =
            ordered.iter().copied().filter(|r| r.score < 0).collect();
        sell.reverse();

        Self { ordered, buy, sell }
    }

    pub fn top_buys(&self, n: usize) -> &[&'a TickerResult] {
        &self.buy[..n.min(self.buy.len())]
    }

    pub fn top_sells(&self, n: usize) -> &[&'a TickerResult] {
        &self.sell[..n.min(self.sell.len())]
    }
}

/// Percentage move from the current to the projected price.
pub fn change_percent(current: Option<f64>, projected: Option<f64>) -> Option<f64> {
    let current = finite(current).filter(|c| *c != 0.0)?;
    let projected = finite(projected)?;
    Some((projected - current) / current * 100.0).filter(|c| c.is_finite())
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedMove<'a> {
    pub symbol: &'a str,
    pub price: f64,
    pub projected_price: f64,
    pub change_percent: f64,
}

/// Ranking over projected price changes, independent of signal scores.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectionRanking<'a> {
    /// Positive changes, biggest gain first.
    pub gainers: Vec<ProjectedMove<'a>>,
    /// Negative changes, biggest loss first.
    pub losers: Vec<ProjectedMove<'a>>,
}

impl<'a> ProjectionRanking<'a> {
    pub fn new(results: &'a [TickerResult]) -> Self {
        let moves = results.iter().filter_map(|r| {
            let change = change_percent(r.price, r.projected_price)?;
            Some(ProjectedMove {
                symbol: &r.symbol,
                price: r.price?,
                projected_price: r.projected_price?,
                change_percent: change,
            })
        });

        let (mut gainers, mut losers) = (Vec::new(), Vec::new());
        for m in moves {
            if m.change_percent > 0.0 {
                gainers.push(m);
            } else if m.change_percent < 0.0 {
                losers.push(m);
            }
        }
        gainers.sort_by(|a, b| b.change_percent.total_cmp(&a.change_percent));
        losers.sort_by(|a, b| a.change_percent.total_cmp(&b.change_percent));

        Self { gainers, losers }
    }

    pub fn is_empty(&self) -> bool {
        self.gainers.is_empty() && self.losers.is_empty()
    }
}
