//! Domain layer - Category encoding, feature building and price prediction

pub mod category;
pub mod error;
pub mod feature;
pub mod flat;
pub mod prediction;

pub use category::{Category, CategoryCode, CategoryTable, EncodedCategories};
pub use error::DomainError;
pub use feature::{build_feature_vector, FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
pub use flat::{validate_input, FlatValidationError, InputRanges, ResaleFlatInput, INPUT_RANGES};
pub use prediction::{predict_price, ModelSource, Price, RegressionModel};
