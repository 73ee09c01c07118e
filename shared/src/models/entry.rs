//! Per-entry yield summaries

use serde::{Deserialize, Serialize};

/// Yield of a single submitted entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct EntryStats {
    pub juice_per_fruit: Option<f64>,
    /// fl oz per pound of fruit
    pub juice_per_pound: Option<f64>,
}

/// Totals-based averages for a fruit (total juice over total fruit or pounds)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct PooledAverages {
    pub record_count: usize,
    pub avg_per_fruit: Option<f64>,
    pub avg_per_pound: Option<f64>,
}
