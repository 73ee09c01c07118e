//! Prediction accuracy models

use serde::{Deserialize, Serialize};

use super::PredictionMethod;

/// Which way a prediction missed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Overestimated,
    Underestimated,
    Exact,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Overestimated => write!(f, "Overestimated"),
            Direction::Underestimated => write!(f, "Underestimated"),
            Direction::Exact => write!(f, "Exact"),
        }
    }
}

/// Tightest prediction band containing the actual yield
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BandMembership {
    WithinFirstBand,
    WithinSecondBand,
    OutsideAllBands,
}

impl std::fmt::Display for BandMembership {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BandMembership::WithinFirstBand => write!(f, "Within ±1σ"),
            BandMembership::WithinSecondBand => write!(f, "Within ±2σ"),
            BandMembership::OutsideAllBands => write!(f, "Outside ±2σ"),
        }
    }
}

/// Comparison of one method's estimate against the observed yield
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccuracyResult {
    pub method: PredictionMethod,
    pub point_estimate: f64,
    pub actual: f64,
    /// point_estimate - actual
    pub signed_difference: f64,
    /// Absent when the actual yield is zero
    pub percentage_error: Option<f64>,
    pub absolute_percentage_error: Option<f64>,
    pub direction: Direction,
    pub band_membership: BandMembership,
}

/// Accuracy of every available method of a report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccuracyReport {
    pub actual: f64,
    pub by_count: Option<AccuracyResult>,
    pub by_weight: Option<AccuracyResult>,
}
