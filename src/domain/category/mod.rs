//! Category domain - Fixed label encodings for town, flat type and flat model

mod table;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

pub use table::{CategoryCode, CategoryTable, FLAT_MODELS, FLAT_TYPES, TOWNS};

/// The three categorical attributes of a resale flat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Town,
    FlatType,
    FlatModel,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Town, Category::FlatType, Category::FlatModel];

    /// Human-readable name, as shown in user-facing messages
    pub fn name(self) -> &'static str {
        match self {
            Self::Town => "town",
            Self::FlatType => "flat type",
            Self::FlatModel => "flat model",
        }
    }

    /// Request field that carries this category
    pub fn field_name(self) -> &'static str {
        match self {
            Self::Town => "town",
            Self::FlatType => "flat_type",
            Self::FlatModel => "flat_model",
        }
    }

    pub fn table(self) -> &'static CategoryTable {
        match self {
            Self::Town => &TOWNS,
            Self::FlatType => &FLAT_TYPES,
            Self::FlatModel => &FLAT_MODELS,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.name() == s || c.field_name() == s)
            .ok_or_else(|| {
                DomainError::invalid_input(
                    "category",
                    format!("unknown category '{}', expected town, flat type or flat model", s),
                )
            })
    }
}

/// Resolve `value` against the table for `category`
pub fn encode(category: Category, value: &str) -> Result<CategoryCode, DomainError> {
    category.table().encode(value)
}

/// Codes for all three categories of one request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EncodedCategories {
    pub town: CategoryCode,
    pub flat_type: CategoryCode,
    pub flat_model: CategoryCode,
}

impl EncodedCategories {
    /// Encode in town, flat type, flat model order; stops at the first unknown value
    pub fn encode(town: &str, flat_type: &str, flat_model: &str) -> Result<Self, DomainError> {
        Ok(Self {
            town: encode(Category::Town, town)?,
            flat_type: encode(Category::FlatType, flat_type)?,
            flat_model: encode(Category::FlatModel, flat_model)?,
        })
    }
}
