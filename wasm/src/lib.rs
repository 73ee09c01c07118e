//! WebAssembly module for the Citrus Juice Tracker
//!
//! Provides client-side computation for:
//! - Fruit yield profiles and batch predictions
//! - Accuracy scoring against the juice actually collected
//! - Per-entry yield summaries
//! - Fruit name normalization
//!
//! Structured values cross the boundary as JSON strings.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

use shared::{build_profile, entry_stats, predict, score_report, select_history};

/// Profile plus prediction, as returned by [`predict_yield`]
#[derive(Debug, Serialize, Deserialize)]
pub struct YieldForecast {
    pub profile: FruitProfile,
    pub prediction: PredictionReport,
}

fn js_error(message: String) -> JsValue {
    web_sys::console::warn_1(&JsValue::from_str(&message));
    js_sys::Error::new(&message).into()
}

fn parse_records(history_json: &str) -> Result<Vec<JuiceRecord>, JsValue> {
    serde_json::from_str(history_json)
        .map_err(|e| js_error(format!("Invalid history JSON: {}", e)))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| js_error(format!("Serialization failed: {}", e)))
}

fn window_arg(window: Option<u32>) -> Option<usize> {
    window.map(|w| w as usize)
}

/// Summarize the history of one fruit over an optional rolling window
#[wasm_bindgen]
pub fn fruit_profile(history_json: &str, fruit: &str, window: Option<u32>) -> Result<String, JsValue> {
    let records = parse_records(history_json)?;
    let history = select_history(&records, fruit, window_arg(window))
        .map_err(|e| js_error(e.to_string()))?;
    to_json(&build_profile(&history))
}

/// Predict the juice yield of a batch from the recorded history
#[wasm_bindgen]
pub fn predict_yield(
    history_json: &str,
    batch_json: &str,
    window: Option<u32>,
) -> Result<String, JsValue> {
    let records = parse_records(history_json)?;
    let batch: BatchDescriptor = serde_json::from_str(batch_json)
        .map_err(|e| js_error(format!("Invalid batch JSON: {}", e)))?;

    let history = select_history(&records, &batch.fruit, window_arg(window))
        .map_err(|e| js_error(e.to_string()))?;
    let profile = build_profile(&history);
    let prediction = predict(&profile, &batch).map_err(|e| js_error(e.to_string()))?;

    to_json(&YieldForecast { profile, prediction })
}

/// Score a prediction report against the juice actually collected
#[wasm_bindgen]
pub fn score_prediction(report_json: &str, actual_juice_oz: f64) -> Result<String, JsValue> {
    let report: PredictionReport = serde_json::from_str(report_json)
        .map_err(|e| js_error(format!("Invalid report JSON: {}", e)))?;
    let accuracy = score_report(&report, actual_juice_oz).map_err(|e| js_error(e.to_string()))?;
    to_json(&accuracy)
}

/// Juice per fruit for a single entry, `undefined` without a fruit count
#[wasm_bindgen]
pub fn calculate_juice_per_fruit(fruit_count: u32, juice_oz: f64) -> Option<f64> {
    summarize(fruit_count, 0.0, juice_oz).juice_per_fruit
}

/// Juice per pound for a single entry, `undefined` without a weight
#[wasm_bindgen]
pub fn calculate_juice_per_pound(weight_g: f64, juice_oz: f64) -> Option<f64> {
    summarize(0, weight_g, juice_oz).juice_per_pound
}

fn summarize(fruit_count: u32, weight_g: f64, juice_oz: f64) -> EntryStats {
    let record = JuiceRecord {
        date: Default::default(),
        fruit: String::new(),
        fruit_count,
        weight_g,
        juice_oz,
    };
    entry_stats(&record)
}

/// Canonical spelling of a fruit name ("  lIME " becomes "Lime")
#[wasm_bindgen]
pub fn normalize_fruit(name: &str) -> String {
    normalize_fruit_name(name)
}

/// Whether a fruit name is acceptable for a new entry
#[wasm_bindgen]
pub fn is_valid_fruit_name(name: &str) -> bool {
    validate_fruit_name(name).is_ok()
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_invalid_history_json_is_an_error() {
        let err = predict_yield("not json", r#"{"fruit":"Lime","fruit_count":3}"#, None).unwrap_err();
        assert!(err.is_instance_of::<js_sys::Error>());
    }

    #[wasm_bindgen_test]
    fn test_zero_window_is_an_error() {
        assert!(fruit_profile("[]", "Lime", Some(0)).is_err());
    }

    #[wasm_bindgen_test]
    fn test_batch_without_quantity_is_an_error() {
        assert!(predict_yield("[]", r#"{"fruit":"Lime"}"#, None).is_err());
    }

    #[wasm_bindgen_test]
    fn test_negative_actual_is_an_error() {
        let json = predict_yield("[]", r#"{"fruit":"Lime","fruit_count":3}"#, None).unwrap();
        let forecast: YieldForecast = serde_json::from_str(&json).unwrap();
        let report_json = serde_json::to_string(&forecast.prediction).unwrap();
        assert!(score_prediction(&report_json, -1.0).is_err());
    }
}
