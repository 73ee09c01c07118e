//! Scoring predictions against the observed yield

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AccuracyReport, AccuracyResult, BandMembership, Direction, MethodPrediction, PredictionReport,
};

fn validate_actual(actual: f64) -> EngineResult<()> {
    if !actual.is_finite() || actual < 0.0 {
        return Err(EngineError::InvalidActual(actual));
    }
    Ok(())
}

/// Classify `actual` against the prediction's bands, tightest band first
pub fn classify_band(prediction: &MethodPrediction, actual: f64) -> BandMembership {
    if prediction.first_band().contains(actual) {
        BandMembership::WithinFirstBand
    } else if prediction.second_band().contains(actual) {
        BandMembership::WithinSecondBand
    } else {
        BandMembership::OutsideAllBands
    }
}

/// Compare one method's estimate with the actual juice collected.
///
/// An actual of zero is valid; only the percentage error is left undefined.
pub fn score(prediction: &MethodPrediction, actual: f64) -> EngineResult<AccuracyResult> {
    validate_actual(actual)?;

    let signed_difference = prediction.point_estimate - actual;
    let percentage_error = if actual > 0.0 {
        Some(signed_difference / actual * 100.0).filter(|pct| pct.is_finite())
    } else {
        None
    };
    let direction = if signed_difference > 0.0 {
        Direction::Overestimated
    } else if signed_difference < 0.0 {
        Direction::Underestimated
    } else {
        Direction::Exact
    };

    Ok(AccuracyResult {
        method: prediction.method,
        point_estimate: prediction.point_estimate,
        actual,
        signed_difference,
        percentage_error,
        absolute_percentage_error: percentage_error.map(f64::abs),
        direction,
        band_membership: classify_band(prediction, actual),
    })
}

/// Score every available method of a report
pub fn score_report(report: &PredictionReport, actual: f64) -> EngineResult<AccuracyReport> {
    validate_actual(actual)?;

    let by_count = report
        .by_count
        .prediction()
        .map(|prediction| score(prediction, actual))
        .transpose()?;
    let by_weight = report
        .by_weight
        .prediction()
        .map(|prediction| score(prediction, actual))
        .transpose()?;

    Ok(AccuracyReport {
        actual,
        by_count,
        by_weight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Band, MethodOutcome, PredictionMethod, UnavailableReason};

    fn prediction(point: f64, deviation: f64) -> MethodPrediction {
        MethodPrediction {
            method: PredictionMethod::ByCount,
            quantity: 6.0,
            point_estimate: point,
            bands: [
                Band::around(point, 1.0, deviation),
                Band::around(point, 2.0, deviation),
            ],
            reference_estimate: None,
        }
    }

    #[test]
    fn test_overestimate() {
        let result = score(&prediction(7.35, 0.2), 7.0).unwrap();
        assert!((result.signed_difference - 0.35).abs() < 1e-12);
        assert!((result.percentage_error.unwrap() - 5.0).abs() < 1e-9);
        assert_eq!(result.direction, Direction::Overestimated);
        assert_eq!(result.band_membership, BandMembership::WithinSecondBand);
    }

    #[test]
    fn test_underestimate_outside_bands() {
        let result = score(&prediction(5.0, 0.1), 6.0).unwrap();
        assert_eq!(result.direction, Direction::Underestimated);
        assert_eq!(result.band_membership, BandMembership::OutsideAllBands);
        assert!((result.absolute_percentage_error.unwrap() - 100.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_exact() {
        let result = score(&prediction(5.0, 0.0), 5.0).unwrap();
        assert_eq!(result.direction, Direction::Exact);
        assert_eq!(result.signed_difference, 0.0);
        assert_eq!(result.band_membership, BandMembership::WithinFirstBand);
    }

    #[test]
    fn test_zero_actual_disables_percentage_only() {
        let result = score(&prediction(2.0, 2.5), 0.0).unwrap();
        assert_eq!(result.percentage_error, None);
        assert_eq!(result.signed_difference, 2.0);
        assert_eq!(result.direction, Direction::Overestimated);
        // lower bound clamps to zero, so zero sits inside the first band
        assert_eq!(result.band_membership, BandMembership::WithinFirstBand);
    }

    #[test]
    fn test_absolute_percentage_error_is_serialized() {
        let result = score(&prediction(5.0, 0.1), 6.0).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        let absolute = json["absolute_percentage_error"].as_f64().unwrap();
        assert!((absolute - 100.0 / 6.0).abs() < 1e-9);
        assert!(json["percentage_error"].as_f64().unwrap() < 0.0);
    }

    #[test]
    fn test_tiny_actual_has_no_percentage_error() {
        let result = score(&prediction(f64::MAX / 2.0, 0.0), f64::MIN_POSITIVE).unwrap();
        assert_eq!(result.percentage_error, None);
        assert_eq!(result.direction, Direction::Overestimated);
    }

    #[test]
    fn test_rejects_negative_actual() {
        assert_eq!(
            score(&prediction(2.0, 0.5), -1.0),
            Err(EngineError::InvalidActual(-1.0))
        );
    }

    #[test]
    fn test_score_report_skips_unavailable_methods() {
        let report = PredictionReport {
            fruit: "Lime".to_string(),
            window: Some(10),
            by_count: MethodOutcome::Available(prediction(7.35, 0.2)),
            by_weight: MethodOutcome::Unavailable {
                method: PredictionMethod::ByWeight,
                reason: UnavailableReason::InsufficientData,
            },
        };
        let accuracy = score_report(&report, 7.35).unwrap();
        assert!(accuracy.by_weight.is_none());
        assert_eq!(accuracy.by_count.unwrap().direction, Direction::Exact);
    }
}
