//! Predicted price value

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// A resale price in whole Singapore dollars
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub const CURRENCY: &'static str = "SGD";

    pub fn new(amount: u64) -> Self {
        Self(amount)
    }

    pub fn amount(self) -> u64 {
        self.0
    }

    /// Undo the log-price transform the model was trained on: `round(exp(output))`
    pub fn from_log_price(output: f64) -> Result<Self, DomainError> {
        if !output.is_finite() {
            return Err(DomainError::inference(format!(
                "model produced a non-finite output: {}",
                output
            )));
        }

        let price = output.exp().round();

        if !price.is_finite() || price > u64::MAX as f64 {
            return Err(DomainError::inference(format!(
                "model output {} is too large to be a price",
                output
            )));
        }

        Ok(Self(price as u64))
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}", self.0)
    }
}
