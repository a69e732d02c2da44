use serde::{Deserialize, Serialize};

/// Zero-line crossing of the MACD line or histogram between the two newest points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrossoverType {
    Bullish,
    Bearish,
    None,
}

impl CrossoverType {
    pub fn between(current: f64, previous: f64) -> Self {
        if current > 0.0 && previous <= 0.0 {
            CrossoverType::Bullish
        } else if current < 0.0 && previous >= 0.0 {
            CrossoverType::Bearish
        } else {
            CrossoverType::None
        }
    }
}

/// Intermediate readings of a MACD window, newest point first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacdEvaluation {
    pub macd_value: f64,
    pub signal_value: f64,
    pub histogram_value: f64,
    /// `macd - signal` at the newest point.
    pub distance: f64,
    /// `macd - signal` at the previous point.
    pub previous_distance: f64,
    pub histogram_min: f64,
    pub histogram_min_index: usize,
    pub histogram_rising: bool,
    /// The MACD line is closing in on the signal line from below.
    pub approaching_signal: bool,
    pub macd_crossover: CrossoverType,
    pub histogram_crossover: CrossoverType,
}

impl MacdEvaluation {
    /// Histogram bottomed out earlier in the window and is now turning up
    /// while MACD converges on its signal line.
    pub fn is_bottoming(&self) -> bool {
        self.histogram_min_index > 0 && self.histogram_rising && self.approaching_signal
    }

    pub fn has_bullish_cross(&self) -> bool {
        self.macd_crossover == CrossoverType::Bullish
            || self.histogram_crossover == CrossoverType::Bullish
    }

    pub fn has_bearish_cross(&self) -> bool {
        self.macd_crossover == CrossoverType::Bearish
            || self.histogram_crossover == CrossoverType::Bearish
    }

    pub fn has_cross(&self) -> bool {
        self.has_bullish_cross() || self.has_bearish_cross()
    }
}
