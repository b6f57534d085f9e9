//! Versioned prediction API

pub mod categories;
pub mod predictions;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/predictions", post(predictions::create_prediction))
        .route("/categories", get(categories::list_categories))
}
