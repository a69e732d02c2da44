use serde::{Deserialize, Serialize};

use crate::indicators::registry::indicators_where;
use crate::models::signal::{Indicator, Signal};
use crate::models::ticker::{Snapshot, TickerResult};

/// Tickers named in the best-tickers line.
pub const BEST_TICKERS_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vibe {
    Bull,
    Bear,
    Neutral,
}

impl Vibe {
    pub fn from_counts(buys: usize, sells: usize) -> Self {
        let net = buys as i64 - sells as i64;
        if net >= 3 || (buys >= 6 && sells <= 2) {
            Vibe::Bull
        } else if net <= -3 || (sells >= 6 && buys <= 2) {
            Vibe::Bear
        } else {
            Vibe::Neutral
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostEmojis {
    pub header_bull: String,
    pub header_bear: String,
    pub header_neutral: String,
    pub strength: String,
    pub weakness: String,
    pub vibe_bull: String,
    pub vibe_bear: String,
    pub vibe_neutral: String,
}

impl Default for PostEmojis {
    fn default() -> Self {
        Self {
            header_bull: "📈".to_string(),
            header_bear: "📉".to_string(),
            header_neutral: "📊".to_string(),
            strength: "✅".to_string(),
            weakness: "❌".to_string(),
            vibe_bull: "🚀".to_string(),
            vibe_bear: "⚠️".to_string(),
            vibe_neutral: "⚖️".to_string(),
        }
    }
}

impl PostEmojis {
    fn header(&self, vibe: Vibe) -> &str {
        match vibe {
            Vibe::Bull => &self.header_bull,
            Vibe::Bear => &self.header_bear,
            Vibe::Neutral => &self.header_neutral,
        }
    }

    fn vibe_line(&self, vibe: Vibe) -> String {
        match vibe {
            Vibe::Bull => format!("{} Bullish setup", self.vibe_bull),
            Vibe::Bear => format!("{} Cautious / Bearish tilt", self.vibe_bear),
            Vibe::Neutral => format!("{} Mixed / Watchlist", self.vibe_neutral),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostOptions {
    /// Indicators named per strengths/weaknesses line.
    pub max_bullets: usize,
    pub emojis: PostEmojis,
    pub show_score: bool,
    pub hashtags: Vec<String>,
}

impl Default for PostOptions {
    fn default() -> Self {
        Self {
            max_bullets: 2,
            emojis: PostEmojis::default(),
            show_score: true,
            hashtags: Vec::new(),
        }
    }
}

/// Pretty names of up to `max` indicators in `pool` carrying `want`.
fn pick_top(snapshot: &Snapshot, want: Signal, pool: &[Indicator], max: usize) -> Vec<&'static str> {
    pool.iter()
        .filter(|i| snapshot.indicators.get(*i) == Some(&want))
        .take(max)
        .map(Indicator::pretty_name)
        .collect()
}

/// Fundamentals first, then technicals, `max` in total.
fn bullets(snapshot: &Snapshot, want: Signal, max: usize) -> Vec<&'static str> {
    let mut picked = pick_top(snapshot, want, &indicators_where(true), max);
    let remaining = max.saturating_sub(picked.len());
    picked.extend(pick_top(snapshot, want, &indicators_where(false), remaining));
    picked
}

fn summarize_strengths(snapshot: &Snapshot, max: usize) -> String {
    let picked = bullets(snapshot, Signal::Buy, max);
    if picked.is_empty() {
        return if snapshot.count(Signal::Buy) >= snapshot.count(Signal::Sell) {
            "Broad support across metrics".to_string()
        } else {
            "Selective strength".to_string()
        };
    }
    format!("{} strong", picked.join(", "))
}

fn summarize_weaknesses(snapshot: &Snapshot, max: usize) -> String {
    let picked = bullets(snapshot, Signal::Sell, max);
    if picked.is_empty() {
        return if snapshot.count(Signal::Hold) > 0 {
            "Some metrics mixed".to_string()
        } else {
            "Minor technical noise".to_string()
        };
    }
    format!("{} weak", picked.join(", "))
}

pub fn format_post(snapshot: &Snapshot, options: &PostOptions) -> String {
    let vibe = Vibe::from_counts(snapshot.count(Signal::Buy), snapshot.count(Signal::Sell));
    let emojis = &options.emojis;

    let header = if options.show_score {
        format!("${} {} Score: {}", snapshot.ticker, emojis.header(vibe), snapshot.score)
    } else {
        format!("${} {}", snapshot.ticker, emojis.header(vibe))
    };

    let mut lines = vec![
        header,
        format!("{} {}", emojis.strength, summarize_strengths(snapshot, options.max_bullets)),
        format!("{} {}", emojis.weakness, summarize_weaknesses(snapshot, options.max_bullets)),
        emojis.vibe_line(vibe),
    ];

    if !options.hashtags.is_empty() {
        let tags: Vec<String> = options
            .hashtags
            .iter()
            .map(|t| if t.starts_with('#') { t.clone() } else { format!("#{t}") })
            .collect();
        lines.push(tags.join(" "));
    }

    lines.join("\n")
}

pub fn format_posts(snapshots: &[Snapshot], options: &PostOptions) -> Vec<String> {
    snapshots.iter().map(|s| format_post(s, options)).collect()
}

/// `Best stocks to buy: AAPL (12.00), MSFT (7.00)` for the first few tickers given.
pub fn best_tickers_post<'a, I>(tickers: I) -> String
where
    I: IntoIterator<Item = &'a TickerResult>,
{
    let top: Vec<String> = tickers
        .into_iter()
        .take(BEST_TICKERS_LIMIT)
        .map(|t| format!("{} ({:.2})", t.symbol, t.score as f64))
        .collect();
    format!("Best stocks to buy: {}", top.join(", "))
}
