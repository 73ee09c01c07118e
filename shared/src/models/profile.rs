//! Fruit yield profile models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Descriptive statistics over one ratio sequence
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RatioStats {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1); zero below two values
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    /// std_dev / mean, absent when the mean is zero
    pub coefficient_of_variation: Option<f64>,
}

impl RatioStats {
    /// Whether the statistics can drive a prediction
    pub fn is_usable(&self) -> bool {
        self.count > 0 && self.mean.is_finite() && self.mean > 0.0 && self.std_dev.is_finite()
    }
}

/// The two ratio families derived from juice records
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RatioFamily {
    /// Juice (fl oz) per fruit
    PerFruit,
    /// Juice (fl oz) per 100 g of fruit
    Per100g,
}

impl std::fmt::Display for RatioFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RatioFamily::PerFruit => write!(f, "juice per fruit"),
            RatioFamily::Per100g => write!(f, "juice per 100 g"),
        }
    }
}

/// One ratio family's values and summary for a fruit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RatioDistribution {
    pub family: RatioFamily,
    /// Ratios in chronological order
    pub values: Vec<f64>,
    pub stats: Option<RatioStats>,
    /// Ratio of the most recent record where it is defined
    pub latest: Option<LatestRatio>,
}

impl RatioDistribution {
    /// Statistics, but only when they can drive a prediction
    pub fn usable_stats(&self) -> Option<&RatioStats> {
        self.stats.as_ref().filter(|stats| stats.is_usable())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LatestRatio {
    pub date: NaiveDate,
    pub value: f64,
}

/// Derived yield profile for one fruit over a history window
///
/// Recomputed on demand and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FruitProfile {
    pub fruit: String,
    /// Rolling window size, `None` for full history
    pub window: Option<usize>,
    /// Number of matching records the ratios were drawn from
    pub record_count: usize,
    pub per_fruit: RatioDistribution,
    pub per_100g: RatioDistribution,
}

impl FruitProfile {
    pub fn distribution(&self, family: RatioFamily) -> &RatioDistribution {
        match family {
            RatioFamily::PerFruit => &self.per_fruit,
            RatioFamily::Per100g => &self.per_100g,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}
