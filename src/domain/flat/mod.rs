//! Flat domain - Raw resale flat input and its boundary range checks

mod entity;
mod validation;

pub use entity::ResaleFlatInput;
pub use validation::{
    validate_input, Bounds, FlatValidationError, InputRanges, INPUT_RANGES, MAX_FLOOR_AREA,
    MAX_LEASE_COMMENCE_YEAR, MAX_REMAINING_LEASE_MONTH, MAX_REMAINING_LEASE_YEAR, MAX_STOREY_END,
    MAX_YEAR, MIN_FLOOR_AREA, MIN_LEASE_COMMENCE_YEAR, MIN_REMAINING_LEASE_MONTH,
    MIN_REMAINING_LEASE_YEAR, MIN_STOREY_START, MIN_YEAR,
};
