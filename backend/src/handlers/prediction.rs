//! Yield profile and prediction HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::services::prediction::{PredictionInput, PredictionService, WindowQuery};
use crate::AppState;

fn service(state: &AppState) -> PredictionService {
    PredictionService::new(state.store.clone(), state.config.prediction.clone())
}

/// Get the yield profile of a fruit
pub async fn get_fruit_profile(
    State(state): State<AppState>,
    Path(fruit): Path<String>,
    Query(query): Query<WindowQuery>,
) -> impl IntoResponse {
    match service(&state).get_profile(&fruit, &query).await {
        Ok(profile) => (StatusCode::OK, Json(profile)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Predict the juice yield of a batch
pub async fn predict_yield(
    State(state): State<AppState>,
    Json(input): Json<PredictionInput>,
) -> impl IntoResponse {
    match service(&state).predict_batch(input).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => e.into_response(),
    }
}
