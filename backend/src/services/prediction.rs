//! Prediction service: yield profiles, predictions and accuracy scoring
//!
//! Each call reads the record store exactly once and feeds that snapshot to
//! every stage of the engine.

use serde::{Deserialize, Serialize};
use shared::{
    build_profile, predict, score_report, select_history, AccuracyReport, BatchDescriptor,
    FruitProfile, PredictionReport,
};

use crate::config::PredictionConfig;
use crate::error::AppResult;
use crate::store::RecordStore;

#[derive(Clone)]
pub struct PredictionService {
    store: RecordStore,
    config: PredictionConfig,
}

/// History window selection shared by profile and prediction requests
#[derive(Debug, Default, Deserialize)]
pub struct WindowQuery {
    /// Rolling window size; falls back to the configured default
    pub window: Option<usize>,
    /// Use every recorded entry instead of a rolling window
    pub full_history: Option<bool>,
}

/// Input for predicting a batch
#[derive(Debug, Deserialize)]
pub struct PredictionInput {
    pub fruit: String,
    pub fruit_count: Option<u32>,
    pub weight_g: Option<f64>,
    #[serde(flatten)]
    pub window: WindowQuery,
    /// Actual juice collected, when already known
    pub actual_juice_oz: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub profile: FruitProfile,
    pub prediction: PredictionReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<AccuracyReport>,
}

impl PredictionService {
    pub fn new(store: RecordStore, config: PredictionConfig) -> Self {
        Self { store, config }
    }

    /// Yield profile of a fruit over the requested window
    pub async fn get_profile(&self, fruit: &str, query: &WindowQuery) -> AppResult<FruitProfile> {
        let window = self.config.resolve_window(query.window, query.full_history);
        let records = self.store.fetch_all().await?;
        let history = select_history(&records, fruit, window)?;
        let profile = build_profile(&history);

        tracing::debug!(
            fruit = %profile.fruit,
            window = ?profile.window,
            records = profile.record_count,
            "Built fruit profile"
        );
        Ok(profile)
    }

    /// Predict a batch and, when the actual yield is given, score it
    pub async fn predict_batch(&self, input: PredictionInput) -> AppResult<PredictionResponse> {
        let window = self
            .config
            .resolve_window(input.window.window, input.window.full_history);
        let records = self.store.fetch_all().await?;
        let history = select_history(&records, &input.fruit, window)?;
        let profile = build_profile(&history);

        let batch = BatchDescriptor {
            fruit: input.fruit,
            fruit_count: input.fruit_count,
            weight_g: input.weight_g,
        };
        let prediction = predict(&profile, &batch)?;
        let accuracy = input
            .actual_juice_oz
            .map(|actual| score_report(&prediction, actual))
            .transpose()?;

        if !prediction.has_prediction() {
            tracing::info!(fruit = %prediction.fruit, "No prediction available for this fruit");
        } else {
            tracing::debug!(
                fruit = %prediction.fruit,
                window = ?prediction.window,
                records = profile.record_count,
                "Predicted juice yield"
            );
        }

        Ok(PredictionResponse {
            profile,
            prediction,
            accuracy,
        })
    }
}
