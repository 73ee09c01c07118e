//! Route definitions for the Citrus Juice Tracker

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/fruits", fruit_routes())
        .route(
            "/entries",
            get(handlers::list_entries).post(handlers::record_entry),
        )
        .route("/predictions", post(handlers::predict_yield))
}

/// Fruit routes
fn fruit_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_fruits))
        .route("/:fruit/profile", get(handlers::get_fruit_profile))
}
