use thiserror::Error;

use super::category::Category;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid input for {category}: '{value}' is not a recognised value")]
    InvalidCategoryValue { category: Category, value: String },

    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Failed to load model from '{path}': {message}")]
    ModelLoad { path: String, message: String },

    #[error("Inference error: {message}")]
    Inference { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl DomainError {
    pub fn invalid_category(category: Category, value: impl Into<String>) -> Self {
        Self::InvalidCategoryValue {
            category,
            value: value.into(),
        }
    }

    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn model_load(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ModelLoad {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn inference(message: impl Into<String>) -> Self {
        Self::Inference {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Name of the request field responsible for a pre-validation failure
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidCategoryValue { category, .. } => Some(category.field_name()),
            Self::InvalidInput { field, .. } => Some(field),
            _ => None,
        }
    }

    /// True for failures caused by the caller's input rather than the model
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidCategoryValue { .. } | Self::InvalidInput { .. }
        )
    }

    /// Short machine-readable code used in API envelopes and metric labels
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidCategoryValue { .. } => "invalid_category_value",
            Self::InvalidInput { .. } => "invalid_input",
            Self::ModelLoad { .. } => "model_load_error",
            Self::Inference { .. } => "inference_error",
            Self::Configuration { .. } => "configuration_error",
        }
    }
}
