//! Juice yield prediction for a prospective batch

use crate::error::{EngineError, EngineResult};
use crate::models::{
    Band, BatchDescriptor, FruitProfile, MethodOutcome, MethodPrediction, PredictionMethod,
    PredictionReport, UnavailableReason,
};
use crate::types::BAND_SIGMA_MULTIPLES;
use crate::validation::normalize_fruit_name;

/// Scale a per-unit ratio by a batch quantity.
///
/// By-count ratios are per fruit; by-weight ratios are per 100 g.
fn scale(method: PredictionMethod, ratio: f64, quantity: f64) -> f64 {
    match method {
        PredictionMethod::ByCount => ratio * quantity,
        PredictionMethod::ByWeight => ratio / 100.0 * quantity,
    }
}

/// Predict one method from a profile.
///
/// `quantity` is the batch fruit count for [`PredictionMethod::ByCount`] and
/// its weight in grams for [`PredictionMethod::ByWeight`]; it must already be
/// positive, otherwise the method is reported as not provided.
pub fn predict_method(
    profile: &FruitProfile,
    method: PredictionMethod,
    quantity: Option<f64>,
) -> MethodOutcome {
    let Some(quantity) = quantity.filter(|q| q.is_finite() && *q > 0.0) else {
        return MethodOutcome::Unavailable {
            method,
            reason: UnavailableReason::QuantityNotProvided,
        };
    };

    let distribution = profile.distribution(method.family());
    let Some(stats) = distribution.usable_stats() else {
        return MethodOutcome::Unavailable {
            method,
            reason: UnavailableReason::InsufficientData,
        };
    };

    let point_estimate = scale(method, stats.mean, quantity);
    // Linear in the ratio, so the deviation scales by the same quantity
    let deviation = scale(method, stats.std_dev, quantity);
    let bands = BAND_SIGMA_MULTIPLES.map(|k| Band::around(point_estimate, k, deviation));
    if !point_estimate.is_finite() || bands.iter().any(|band| !band.upper.is_finite()) {
        return MethodOutcome::Unavailable {
            method,
            reason: UnavailableReason::EstimateOutOfRange,
        };
    }
    let reference_estimate = distribution
        .latest
        .map(|latest| scale(method, latest.value, quantity))
        .filter(|estimate| estimate.is_finite());

    MethodOutcome::Available(MethodPrediction {
        method,
        quantity,
        point_estimate,
        bands,
        reference_estimate,
    })
}

/// Predict the batch's juice yield with every method side by side.
///
/// The batch must name the profile's fruit and carry a positive count or
/// weight. A method lacking its quantity or usable history is reported as
/// unavailable without affecting the other.
pub fn predict(profile: &FruitProfile, batch: &BatchDescriptor) -> EngineResult<PredictionReport> {
    let fruit = normalize_fruit_name(&batch.fruit);
    if fruit.is_empty() {
        return Err(EngineError::InvalidBatchDescriptor("fruit name is empty"));
    }
    if fruit != profile.fruit {
        return Err(EngineError::InvalidBatchDescriptor(
            "batch fruit does not match the profile",
        ));
    }

    let count = batch.usable_count().map(f64::from);
    let weight = batch.usable_weight();
    if count.is_none() && weight.is_none() {
        return Err(EngineError::InvalidBatchDescriptor(
            "a positive fruit count or weight is required",
        ));
    }

    Ok(PredictionReport {
        fruit,
        window: profile.window,
        by_count: predict_method(profile, PredictionMethod::ByCount, count),
        by_weight: predict_method(profile, PredictionMethod::ByWeight, weight),
    })
}
