//! Application state for shared services

use std::sync::Arc;

use crate::domain::ModelSource;
use crate::infrastructure::services::{PredictionService, PredictionServiceTrait};

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub prediction_service: Arc<dyn PredictionServiceTrait>,
}

impl AppState {
    pub fn new(prediction_service: Arc<dyn PredictionServiceTrait>) -> Self {
        Self { prediction_service }
    }

    /// Build state around a model source using the default prediction pipeline
    pub fn from_model_source(source: Arc<dyn ModelSource>) -> Self {
        Self::new(Arc::new(PredictionService::new(source)))
    }
}
