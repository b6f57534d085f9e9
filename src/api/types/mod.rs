//! HTTP request/response types

pub mod error;
pub mod json;
pub mod prediction;

pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use json::Json;
pub use prediction::{CategoriesResponse, PredictionRequest, PredictionResponse};
