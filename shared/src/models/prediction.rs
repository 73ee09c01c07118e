//! Yield prediction models

use serde::{Deserialize, Serialize};

use super::RatioFamily;

/// Prediction methods
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PredictionMethod {
    ByCount,
    ByWeight,
}

impl PredictionMethod {
    pub const ALL: [PredictionMethod; 2] = [PredictionMethod::ByCount, PredictionMethod::ByWeight];

    /// Ratio family the method scales
    pub fn family(&self) -> RatioFamily {
        match self {
            PredictionMethod::ByCount => RatioFamily::PerFruit,
            PredictionMethod::ByWeight => RatioFamily::Per100g,
        }
    }
}

impl std::fmt::Display for PredictionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PredictionMethod::ByCount => write!(f, "By fruit count"),
            PredictionMethod::ByWeight => write!(f, "By weight"),
        }
    }
}

/// Symmetric interval around a point estimate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Band {
    /// Multiple of the standard deviation (1.0 or 2.0)
    pub sigma_multiple: f64,
    /// Distance from the point estimate to either unclamped bound
    pub half_width: f64,
    /// Clamped at zero
    pub lower: f64,
    pub upper: f64,
}

impl Band {
    pub fn around(point_estimate: f64, sigma_multiple: f64, deviation: f64) -> Self {
        let half_width = sigma_multiple * deviation;
        Self {
            sigma_multiple,
            half_width,
            lower: (point_estimate - half_width).max(0.0),
            upper: point_estimate + half_width,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// Estimate produced by one method
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MethodPrediction {
    pub method: PredictionMethod,
    /// Batch fruit count or weight in grams
    pub quantity: f64,
    pub point_estimate: f64,
    /// First-order (1σ) then second-order (2σ) band
    pub bands: [Band; 2],
    /// "Like last entry" estimate from the most recent record's own ratio
    pub reference_estimate: Option<f64>,
}

impl MethodPrediction {
    pub fn first_band(&self) -> &Band {
        &self.bands[0]
    }

    pub fn second_band(&self) -> &Band {
        &self.bands[1]
    }
}

/// Why a method produced no estimate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableReason {
    /// No usable history for the method's ratio family
    InsufficientData,
    /// The batch gave no positive count or weight for this method
    QuantityNotProvided,
    /// The scaled estimate or its bands are not finite numbers
    EstimateOutOfRange,
}

impl std::fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnavailableReason::InsufficientData => write!(f, "Insufficient data"),
            UnavailableReason::QuantityNotProvided => write!(f, "Quantity not provided"),
            UnavailableReason::EstimateOutOfRange => write!(f, "Estimate out of range"),
        }
    }
}

/// Result of one prediction method
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MethodOutcome {
    Available(MethodPrediction),
    Unavailable {
        method: PredictionMethod,
        reason: UnavailableReason,
    },
}

impl MethodOutcome {
    pub fn method(&self) -> PredictionMethod {
        match self {
            MethodOutcome::Available(prediction) => prediction.method,
            MethodOutcome::Unavailable { method, .. } => *method,
        }
    }

    pub fn prediction(&self) -> Option<&MethodPrediction> {
        match self {
            MethodOutcome::Available(prediction) => Some(prediction),
            MethodOutcome::Unavailable { .. } => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, MethodOutcome::Available(_))
    }
}

/// Side-by-side predictions for a prospective batch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionReport {
    pub fruit: String,
    pub window: Option<usize>,
    pub by_count: MethodOutcome,
    pub by_weight: MethodOutcome,
}

impl PredictionReport {
    pub fn outcome(&self, method: PredictionMethod) -> &MethodOutcome {
        match method {
            PredictionMethod::ByCount => &self.by_count,
            PredictionMethod::ByWeight => &self.by_weight,
        }
    }

    /// True when at least one method produced an estimate
    pub fn has_prediction(&self) -> bool {
        self.by_count.is_available() || self.by_weight.is_available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_clamps_lower_bound() {
        let band = Band::around(1.0, 2.0, 0.8);
        assert_eq!(band.lower, 0.0);
        assert!((band.upper - 2.6).abs() < 1e-12);
        assert!((band.half_width - 1.6).abs() < 1e-12);
    }

    #[test]
    fn test_band_contains_bounds() {
        let band = Band::around(5.0, 1.0, 0.5);
        assert!(band.contains(4.5));
        assert!(band.contains(5.5));
        assert!(!band.contains(5.6));
    }

    #[test]
    fn test_method_display() {
        assert_eq!(PredictionMethod::ByCount.to_string(), "By fruit count");
        assert_eq!(PredictionMethod::ByWeight.to_string(), "By weight");
    }
}
