//! Juicing session records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single stored juicing session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JuiceRecord {
    pub date: NaiveDate,
    /// Normalized fruit name (see [`crate::normalize_fruit_name`])
    pub fruit: String,
    pub fruit_count: u32,
    pub weight_g: f64,
    pub juice_oz: f64,
}

impl JuiceRecord {
    pub fn new(
        date: NaiveDate,
        fruit: impl Into<String>,
        fruit_count: u32,
        weight_g: f64,
        juice_oz: f64,
    ) -> Self {
        Self {
            date,
            fruit: fruit.into(),
            fruit_count,
            weight_g,
            juice_oz,
        }
    }

    /// Juice per fruit, defined only when the count is positive
    pub fn per_fruit_ratio(&self) -> Option<f64> {
        if self.fruit_count == 0 || !self.juice_oz.is_finite() {
            return None;
        }
        Some(self.juice_oz / f64::from(self.fruit_count))
    }

    /// Juice per 100 g of fruit, defined only when the weight is positive
    pub fn per_100g_ratio(&self) -> Option<f64> {
        if self.weight_g <= 0.0 || !self.weight_g.is_finite() || !self.juice_oz.is_finite() {
            return None;
        }
        Some(self.juice_oz / self.weight_g * 100.0)
    }
}

/// A prospective batch the user is about to juice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BatchDescriptor {
    pub fruit: String,
    pub fruit_count: Option<u32>,
    pub weight_g: Option<f64>,
}

impl BatchDescriptor {
    pub fn new(fruit: impl Into<String>) -> Self {
        Self {
            fruit: fruit.into(),
            ..Self::default()
        }
    }

    pub fn with_count(mut self, fruit_count: u32) -> Self {
        self.fruit_count = Some(fruit_count);
        self
    }

    pub fn with_weight(mut self, weight_g: f64) -> Self {
        self.weight_g = Some(weight_g);
        self
    }

    /// Fruit count usable as a scale factor (present and positive)
    pub fn usable_count(&self) -> Option<u32> {
        self.fruit_count.filter(|count| *count > 0)
    }

    /// Weight usable as a scale factor (present, finite and positive)
    pub fn usable_weight(&self) -> Option<f64> {
        self.weight_g.filter(|weight| weight.is_finite() && *weight > 0.0)
    }
}
