//! Prediction endpoint payloads

use serde::{Deserialize, Serialize};

use crate::domain::{Category, CategoryTable, InputRanges, Price, ResaleFlatInput, INPUT_RANGES};
use crate::infrastructure::services::Prediction;

/// Request body for `POST /v1/predictions`
pub type PredictionRequest = ResaleFlatInput;

/// Response body for a successful prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub object: String,
    pub price: u64,
    pub currency: String,
    pub features: Vec<f64>,
    pub created: i64,
}

impl PredictionResponse {
    pub fn from_prediction(prediction: &Prediction) -> Self {
        Self {
            object: "prediction".to_string(),
            price: prediction.price.amount(),
            currency: Price::CURRENCY.to_string(),
            features: prediction.features.as_slice().to_vec(),
            created: chrono::Utc::now().timestamp(),
        }
    }
}

/// One label and the code the model expects for it
#[derive(Debug, Clone, Serialize)]
pub struct CategoryEntry {
    pub label: &'static str,
    pub code: u32,
}

/// Labels of one category table
#[derive(Debug, Clone, Serialize)]
pub struct CategoryList {
    pub category: Category,
    pub values: Vec<CategoryEntry>,
}

impl CategoryList {
    fn from_table(table: &CategoryTable) -> Self {
        Self {
            category: table.category(),
            values: table
                .entries()
                .map(|(label, code)| CategoryEntry {
                    label,
                    code: code.value(),
                })
                .collect(),
        }
    }
}

/// Response body for `GET /v1/categories`
#[derive(Debug, Clone, Serialize)]
pub struct CategoriesResponse {
    pub object: String,
    pub data: Vec<CategoryList>,
    pub ranges: InputRanges,
}

impl CategoriesResponse {
    pub fn current() -> Self {
        Self {
            object: "list".to_string(),
            data: Category::ALL
                .iter()
                .map(|category| CategoryList::from_table(category.table()))
                .collect(),
            ranges: INPUT_RANGES,
        }
    }
}
