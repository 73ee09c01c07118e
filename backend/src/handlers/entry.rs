//! Juice entry HTTP handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::services::entry::{EntryService, RecordEntryInput};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct EntryFilter {
    pub fruit: Option<String>,
}

/// List recorded entries
pub async fn list_entries(
    State(state): State<AppState>,
    Query(filter): Query<EntryFilter>,
) -> impl IntoResponse {
    let service = EntryService::new(state.store.clone());

    match service.list_entries(filter.fruit.as_deref()).await {
        Ok(entries) => (StatusCode::OK, Json(serde_json::json!({ "entries": entries }))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Record a new juicing session
pub async fn record_entry(
    State(state): State<AppState>,
    Json(input): Json<RecordEntryInput>,
) -> impl IntoResponse {
    let service = EntryService::new(state.store.clone());

    match service.record_entry(input).await {
        Ok(entry) => (StatusCode::CREATED, Json(entry)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// List fruit names for the entry form
pub async fn list_fruits(State(state): State<AppState>) -> impl IntoResponse {
    let service = EntryService::new(state.store.clone());

    match service.known_fruits().await {
        Ok(fruits) => (StatusCode::OK, Json(serde_json::json!({ "fruits": fruits }))).into_response(),
        Err(e) => e.into_response(),
    }
}
