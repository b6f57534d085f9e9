//! Prediction service - Encodes, builds features and runs the model for one flat

use std::fmt::Debug;
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::domain::{
    build_feature_vector, predict_price, DomainError, EncodedCategories, FeatureVector,
    ModelSource, Price, ResaleFlatInput,
};
use crate::infrastructure::observability::{record_prediction, PredictionOutcome};

/// A priced flat together with the intermediate encodings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub price: Price,
    pub categories: EncodedCategories,
    pub features: FeatureVector,
}

/// Trait for the prediction service (for dynamic dispatch in AppState)
#[async_trait]
pub trait PredictionServiceTrait: Send + Sync + Debug {
    /// Price one flat
    async fn predict(&self, input: &ResaleFlatInput) -> Result<Prediction, DomainError>;

    /// Confirm the model artifact can be loaded
    async fn check_model(&self) -> Result<(), DomainError>;

    /// Where the model artifact is read from
    fn model_location(&self) -> String;
}

/// Default prediction pipeline backed by a [`ModelSource`]
pub struct PredictionService {
    source: Arc<dyn ModelSource>,
}

impl Debug for PredictionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredictionService")
            .field("model", &self.source.location())
            .finish()
    }
}

impl PredictionService {
    pub fn new(source: Arc<dyn ModelSource>) -> Self {
        Self { source }
    }

    /// Categories are encoded and the vector built before the model is touched,
    /// so bad input never triggers a load.
    async fn run(&self, input: &ResaleFlatInput) -> Result<Prediction, DomainError> {
        let categories =
            EncodedCategories::encode(&input.town, &input.flat_type, &input.flat_model)?;
        let features = build_feature_vector(input, &categories)?;

        debug!(features = ?features.named().collect::<Vec<_>>(), "Feature vector built");

        let model = self.source.load().await?;
        let price = predict_price(model.as_ref(), &features)?;

        Ok(Prediction {
            price,
            categories,
            features,
        })
    }
}

fn outcome_of(result: &Result<Prediction, DomainError>) -> PredictionOutcome {
    match result {
        Ok(_) => PredictionOutcome::Success,
        Err(DomainError::ModelLoad { .. }) => PredictionOutcome::ModelUnavailable,
        Err(e) if e.is_input_error() => PredictionOutcome::InvalidInput,
        Err(_) => PredictionOutcome::InferenceFailed,
    }
}

#[async_trait]
impl PredictionServiceTrait for PredictionService {
    #[instrument(skip(self, input), fields(town = %input.town, flat_type = %input.flat_type))]
    async fn predict(&self, input: &ResaleFlatInput) -> Result<Prediction, DomainError> {
        let start = Instant::now();
        let result = self.run(input).await;
        let outcome = outcome_of(&result);

        record_prediction(outcome, start.elapsed());

        match &result {
            Ok(prediction) => info!(price = prediction.price.amount(), "Prediction completed"),
            Err(e) => warn!(outcome = outcome.as_str(), error = %e, "Prediction failed"),
        }

        result
    }

    async fn check_model(&self) -> Result<(), DomainError> {
        self.source.load().await.map(|_| ())
    }

    fn model_location(&self) -> String {
        self.source.location()
    }
}
