//! Boundary range checks for resale flat input
//!
//! These mirror the min/max limits of the input form. The feature transformer
//! does not enforce them; callers at the HTTP and CLI boundaries do.

use serde::Serialize;
use thiserror::Error;

use super::ResaleFlatInput;
use crate::domain::DomainError;

pub const MIN_FLOOR_AREA: f64 = 31.0;
pub const MAX_FLOOR_AREA: f64 = 280.0;
pub const MIN_STOREY_START: f64 = 1.0;
pub const MAX_STOREY_END: f64 = 50.0;
pub const MIN_REMAINING_LEASE_YEAR: f64 = 42.0;
pub const MAX_REMAINING_LEASE_YEAR: f64 = 97.0;
pub const MIN_REMAINING_LEASE_MONTH: f64 = 0.0;
pub const MAX_REMAINING_LEASE_MONTH: f64 = 11.0;
pub const MIN_YEAR: f64 = 2015.0;
pub const MAX_YEAR: f64 = 2024.0;
pub const MIN_LEASE_COMMENCE_YEAR: f64 = 1966.0;
pub const MAX_LEASE_COMMENCE_YEAR: f64 = 2022.0;

/// Inclusive bounds of one numeric field
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Declared valid ranges, published to form builders
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InputRanges {
    pub year: Bounds,
    pub floor_area_sqm: Bounds,
    pub storey: Bounds,
    pub remaining_lease_years: Bounds,
    pub remaining_lease_months: Bounds,
    pub lease_commence_year: Bounds,
}

pub const INPUT_RANGES: InputRanges = InputRanges {
    year: Bounds::new(MIN_YEAR, MAX_YEAR),
    floor_area_sqm: Bounds::new(MIN_FLOOR_AREA, MAX_FLOOR_AREA),
    storey: Bounds::new(MIN_STOREY_START, MAX_STOREY_END),
    remaining_lease_years: Bounds::new(MIN_REMAINING_LEASE_YEAR, MAX_REMAINING_LEASE_YEAR),
    remaining_lease_months: Bounds::new(MIN_REMAINING_LEASE_MONTH, MAX_REMAINING_LEASE_MONTH),
    lease_commence_year: Bounds::new(MIN_LEASE_COMMENCE_YEAR, MAX_LEASE_COMMENCE_YEAR),
};

/// Range check failures
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FlatValidationError {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} {value} is out of range: must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("storey_end {end} must not be below storey_start {start}")]
    InvertedStoreyRange { start: f64, end: f64 },
}

impl FlatValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            Self::NotFinite { field } | Self::OutOfRange { field, .. } => field,
            Self::InvertedStoreyRange { .. } => "storey_end",
        }
    }
}

impl From<FlatValidationError> for DomainError {
    fn from(err: FlatValidationError) -> Self {
        DomainError::invalid_input(err.field(), err.to_string())
    }
}

fn check(field: &'static str, value: f64, bounds: Bounds) -> Result<(), FlatValidationError> {
    if !value.is_finite() {
        return Err(FlatValidationError::NotFinite { field });
    }

    if !bounds.contains(value) {
        return Err(FlatValidationError::OutOfRange {
            field,
            value,
            min: bounds.min,
            max: bounds.max,
        });
    }

    Ok(())
}

/// Validate a complete input against the declared ranges
pub fn validate_input(input: &ResaleFlatInput) -> Result<(), FlatValidationError> {
    let ranges = &INPUT_RANGES;

    check("year", input.year, ranges.year)?;
    check("floor_area_sqm", input.floor_area_sqm, ranges.floor_area_sqm)?;
    check("storey_start", input.storey_start, ranges.storey)?;
    check("storey_end", input.storey_end, ranges.storey)?;

    if input.storey_end < input.storey_start {
        return Err(FlatValidationError::InvertedStoreyRange {
            start: input.storey_start,
            end: input.storey_end,
        });
    }

    check(
        "remaining_lease_years",
        input.remaining_lease_years,
        ranges.remaining_lease_years,
    )?;
    check(
        "remaining_lease_months",
        input.remaining_lease_months,
        ranges.remaining_lease_months,
    )?;
    check(
        "lease_commence_year",
        input.lease_commence_year,
        ranges.lease_commence_year,
    )?;

    Ok(())
}
