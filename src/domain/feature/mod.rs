//! Feature domain - Builds the numeric vector the regression model consumes

use serde::Serialize;

use crate::domain::category::EncodedCategories;
use crate::domain::flat::ResaleFlatInput;
use crate::domain::DomainError;

/// Number of features the model was trained on
pub const FEATURE_COUNT: usize = 10;

/// Feature names in model input order
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "year",
    "town",
    "flat_type",
    "floor_area_sqm",
    "flat_model",
    "log_storey_start",
    "log_storey_end",
    "remaining_lease_years",
    "remaining_lease_months",
    "lease_commence_year",
];

/// Fixed-length model input; every element is non-negative
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_array(self) -> [f64; FEATURE_COUNT] {
        self.0
    }

    /// Feature names paired with their values
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_NAMES.iter().copied().zip(self.0.iter().copied())
    }
}

impl std::ops::Index<usize> for FeatureVector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// Truncate toward zero, the way an integer cast does
fn truncate(field: &str, value: f64) -> Result<f64, DomainError> {
    if !value.is_finite() {
        return Err(DomainError::invalid_input(field, "must be a finite number"));
    }

    Ok(value.trunc())
}

/// Natural log of a truncated storey number.
///
/// Storeys below 1 have no usable logarithm and are rejected instead of being
/// clamped into a zero feature.
fn log_storey(field: &str, value: f64) -> Result<f64, DomainError> {
    let storey = truncate(field, value)?;

    if storey <= 0.0 {
        return Err(DomainError::invalid_input(
            field,
            format!("storey must be at least 1, got {}", value),
        ));
    }

    Ok(storey.ln())
}

/// Build the model input from a raw record and its already-resolved category codes
pub fn build_feature_vector(
    input: &ResaleFlatInput,
    codes: &EncodedCategories,
) -> Result<FeatureVector, DomainError> {
    let features = [
        truncate("year", input.year)?,
        f64::from(codes.town),
        f64::from(codes.flat_type),
        truncate("floor_area_sqm", input.floor_area_sqm)?,
        f64::from(codes.flat_model),
        log_storey("storey_start", input.storey_start)?,
        log_storey("storey_end", input.storey_end)?,
        truncate("remaining_lease_years", input.remaining_lease_years)?,
        truncate("remaining_lease_months", input.remaining_lease_months)?,
        truncate("lease_commence_year", input.lease_commence_year)?,
    ];

    Ok(FeatureVector(features.map(|value| value.max(0.0))))
}
