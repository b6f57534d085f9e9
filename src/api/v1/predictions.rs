//! Prediction endpoint handler

use axum::extract::State;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, PredictionRequest, PredictionResponse};
use crate::domain::{validate_input, DomainError};

/// POST /v1/predictions
pub async fn create_prediction(
    State(state): State<AppState>,
    Json(request): Json<PredictionRequest>,
) -> Result<Json<PredictionResponse>, ApiError> {
    debug!(town = %request.town, year = request.year, "Prediction requested");

    validate_input(&request).map_err(|e| ApiError::from(DomainError::from(e)))?;

    let prediction = state.prediction_service.predict(&request).await?;

    Ok(Json(PredictionResponse::from_prediction(&prediction)))
}
