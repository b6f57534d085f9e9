//! Raw resale flat input

use serde::{Deserialize, Serialize};

/// Untransformed attributes of one resale flat, exactly as the caller supplied them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResaleFlatInput {
    /// Year of the resale transaction
    pub year: f64,

    pub town: String,

    pub flat_type: String,

    /// Floor area in square metres
    pub floor_area_sqm: f64,

    pub flat_model: String,

    pub storey_start: f64,

    pub storey_end: f64,

    pub remaining_lease_years: f64,

    pub remaining_lease_months: f64,

    /// Year the lease commenced
    pub lease_commence_year: f64,
}

impl ResaleFlatInput {
    /// Create an input with the three category labels; numeric fields start at zero
    pub fn new(
        town: impl Into<String>,
        flat_type: impl Into<String>,
        flat_model: impl Into<String>,
    ) -> Self {
        Self {
            year: 0.0,
            town: town.into(),
            flat_type: flat_type.into(),
            floor_area_sqm: 0.0,
            flat_model: flat_model.into(),
            storey_start: 0.0,
            storey_end: 0.0,
            remaining_lease_years: 0.0,
            remaining_lease_months: 0.0,
            lease_commence_year: 0.0,
        }
    }

    pub fn with_year(mut self, year: f64) -> Self {
        self.year = year;
        self
    }

    pub fn with_floor_area(mut self, sqm: f64) -> Self {
        self.floor_area_sqm = sqm;
        self
    }

    pub fn with_storey_range(mut self, start: f64, end: f64) -> Self {
        self.storey_start = start;
        self.storey_end = end;
        self
    }

    pub fn with_remaining_lease(mut self, years: f64, months: f64) -> Self {
        self.remaining_lease_years = years;
        self.remaining_lease_months = months;
        self
    }

    pub fn with_lease_commence_year(mut self, year: f64) -> Self {
        self.lease_commence_year = year;
        self
    }
}
