//! Signal-to-score aggregation

use crate::indicators::registry::IndicatorCategory;
use crate::models::signal::IndicatorSignal;
use std::collections::HashMap;

/// Sum of buy scores minus sum of sell scores. Holds contribute nothing.
pub fn aggregate_score(signals: &[IndicatorSignal]) -> i64 {
    signals.iter().map(IndicatorSignal::contribution).sum()
}

/// Net contribution per indicator category, in first-seen order.
pub fn aggregate_by_category(signals: &[IndicatorSignal]) -> Vec<(IndicatorCategory, i64)> {
    let mut order = Vec::new();
    let mut totals: HashMap<IndicatorCategory, i64> = HashMap::new();

    for signal in signals {
        let category = signal.indicator.category();
        if !totals.contains_key(&category) {
            order.push(category);
        }
        *totals.entry(category).or_insert(0) += signal.contribution();
    }

    order
        .into_iter()
        .map(|c| (c, totals.get(&c).copied().unwrap_or(0)))
        .collect()
}
