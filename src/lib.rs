//! HDB resale flat price predictor
//!
//! Encodes categorical flat attributes, builds the ten-element feature vector
//! and runs a pre-trained regression model to estimate a resale price in SGD.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use api::state::AppState;
use infrastructure::model::create_model_source;
use tracing::info;

/// Create application state from configuration.
///
/// The model is not read here; the first prediction or readiness check loads it.
pub fn create_app_state_with_config(config: &AppConfig) -> AppState {
    let source = create_model_source(&config.model);

    info!(
        model = %source.location(),
        load_policy = ?config.model.load_policy,
        "Prediction service configured"
    );

    AppState::from_model_source(source)
}
