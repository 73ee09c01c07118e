//! Yield ratio statistics
//!
//! Both ratio families use the sample standard deviation (n - 1). A sequence
//! with a single value has a standard deviation of zero.

use crate::engine::filter::History;
use crate::models::{FruitProfile, JuiceRecord, LatestRatio, RatioDistribution, RatioFamily, RatioStats};

/// Ratio of `family` for a record, `None` when its denominator is not positive
pub fn family_ratio(record: &JuiceRecord, family: RatioFamily) -> Option<f64> {
    match family {
        RatioFamily::PerFruit => record.per_fruit_ratio(),
        RatioFamily::Per100g => record.per_100g_ratio(),
    }
}

/// Summarize the finite values of a ratio sequence, `None` when there are none
pub fn ratio_stats(values: &[f64]) -> Option<RatioStats> {
    let values: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if values.is_empty() {
        return None;
    }

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;
    let std_dev = sample_std_dev(&values, mean);
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
    let coefficient_of_variation = if mean != 0.0 { Some(std_dev / mean) } else { None };

    Some(RatioStats {
        count,
        // Summation error can push the mean just outside [min, max]
        mean: mean.clamp(min, max),
        std_dev,
        min,
        max,
        coefficient_of_variation,
    })
}

fn sample_std_dev(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

fn distribution(history: &History<'_>, family: RatioFamily) -> RatioDistribution {
    let values: Vec<f64> = history
        .iter()
        .filter_map(|record| family_ratio(record, family))
        .collect();

    let latest = history.iter().rev().find_map(|record| {
        family_ratio(record, family).map(|value| LatestRatio {
            date: record.date,
            value,
        })
    });

    RatioDistribution {
        family,
        stats: ratio_stats(&values),
        values,
        latest,
    }
}

/// Build the yield profile of a filtered history
pub fn build_profile(history: &History<'_>) -> FruitProfile {
    FruitProfile {
        fruit: history.fruit.clone(),
        window: history.window,
        record_count: history.len(),
        per_fruit: distribution(history, RatioFamily::PerFruit),
        per_100g: distribution(history, RatioFamily::Per100g),
    }
}
