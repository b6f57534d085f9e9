//! Regression model and model source traits

use std::sync::Arc;

use async_trait::async_trait;

use super::Price;
use crate::domain::feature::{FeatureVector, FEATURE_COUNT};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// A trained regression model producing log-prices
pub trait RegressionModel: Send + Sync + std::fmt::Debug {
    /// Number of input features the model was trained on
    fn n_features(&self) -> usize;

    /// Raw model output for one sample (log of the price)
    fn predict(&self, features: &[f64]) -> Result<f64, DomainError>;
}

/// Where prediction code obtains its model from
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ModelSource: Send + Sync {
    /// Load (or reuse) the model
    async fn load(&self) -> Result<Arc<dyn RegressionModel>, DomainError>;

    /// Human-readable location of the artifact, for logs and health checks
    fn location(&self) -> String;
}

/// Run one inference and convert the log output back into a price
pub fn predict_price(
    model: &dyn RegressionModel,
    features: &FeatureVector,
) -> Result<Price, DomainError> {
    if model.n_features() != FEATURE_COUNT {
        return Err(DomainError::inference(format!(
            "model expects {} features, feature vector has {}",
            model.n_features(),
            FEATURE_COUNT
        )));
    }

    let output = model.predict(features.as_slice())?;
    Price::from_log_price(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::EncodedCategories;
    use crate::domain::feature::build_feature_vector;
    use crate::domain::flat::ResaleFlatInput;

    #[derive(Debug)]
    struct ConstantModel {
        n_features: usize,
        output: f64,
    }

    impl RegressionModel for ConstantModel {
        fn n_features(&self) -> usize {
            self.n_features
        }

        fn predict(&self, _features: &[f64]) -> Result<f64, DomainError> {
            Ok(self.output)
        }
    }

    fn features() -> FeatureVector {
        let input = ResaleFlatInput::new("BEDOK", "3 ROOM", "Improved")
            .with_year(2019.0)
            .with_floor_area(68.0)
            .with_storey_range(4.0, 6.0)
            .with_remaining_lease(60.0, 0.0)
            .with_lease_commence_year(1980.0);
        let codes = EncodedCategories::encode("BEDOK", "3 ROOM", "Improved").unwrap();
        build_feature_vector(&input, &codes).unwrap()
    }

    #[test]
    fn test_predict_price_exponentiates_output() {
        let model = ConstantModel {
            n_features: FEATURE_COUNT,
            output: f64::ln(350_000.0),
        };

        let price = predict_price(&model, &features()).unwrap();
        assert_eq!(price.amount(), 350_000);
    }

    #[test]
    fn test_feature_count_mismatch_is_inference_error() {
        let model = ConstantModel {
            n_features: 9,
            output: 12.0,
        };

        let err = predict_price(&model, &features()).unwrap_err();
        assert!(matches!(err, DomainError::Inference { .. }));
        assert!(err.to_string().contains("expects 9 features"));
    }
}
