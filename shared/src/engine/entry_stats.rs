//! Yield of a single entry and totals-based fruit averages

use crate::engine::filter::History;
use crate::models::{EntryStats, JuiceRecord, PooledAverages};
use crate::types::GRAMS_PER_POUND;

/// Juice per fruit and per pound for one entry
pub fn entry_stats(record: &JuiceRecord) -> EntryStats {
    let juice_per_pound = if record.weight_g > 0.0 && record.weight_g.is_finite() {
        Some(record.juice_oz / (record.weight_g / GRAMS_PER_POUND))
    } else {
        None
    };

    EntryStats {
        juice_per_fruit: record.per_fruit_ratio(),
        juice_per_pound,
    }
}

/// Total juice over total fruit and total pounds across a history.
///
/// Unlike the ratio means these weight every fruit and gram equally, so a
/// large batch counts for more than a small one.
pub fn pooled_averages(history: &History<'_>) -> PooledAverages {
    let total_juice: f64 = history.iter().map(|r| r.juice_oz).sum();
    let total_fruit: u64 = history.iter().map(|r| u64::from(r.fruit_count)).sum();
    let total_weight: f64 = history.iter().map(|r| r.weight_g).sum();

    let avg_per_fruit = if total_fruit > 0 {
        Some(total_juice / total_fruit as f64)
    } else {
        None
    };
    let avg_per_pound = if total_weight > 0.0 && total_weight.is_finite() {
        Some(total_juice / (total_weight / GRAMS_PER_POUND))
    } else {
        None
    };

    PooledAverages {
        record_count: history.len(),
        avg_per_fruit,
        avg_per_pound,
    }
}
