//! Prediction domain - Regression model seam and the resulting price

mod model;
mod price;

#[cfg(test)]
pub use model::MockModelSource;
pub use model::{predict_price, ModelSource, RegressionModel};
pub use price::Price;
