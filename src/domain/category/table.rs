//! Static label-to-code tables
//!
//! Codes are positions in the label slice, so they are dense, start at 0 and
//! are unique within a table. The order must match the encoding the model was
//! trained with.

use serde::{Deserialize, Serialize};

use super::Category;
use crate::domain::DomainError;

/// Integer code a trained model expects in place of a category label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryCode(u32);

impl CategoryCode {
    pub fn value(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CategoryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<CategoryCode> for f64 {
    fn from(code: CategoryCode) -> Self {
        f64::from(code.0)
    }
}

/// Immutable mapping from an exact-case label to its code
#[derive(Debug)]
pub struct CategoryTable {
    category: Category,
    labels: &'static [&'static str],
}

impl CategoryTable {
    const fn new(category: Category, labels: &'static [&'static str]) -> Self {
        Self { category, labels }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Look up `value` by exact match; no trimming or case folding
    pub fn encode(&self, value: &str) -> Result<CategoryCode, DomainError> {
        self.labels
            .iter()
            .position(|label| *label == value)
            .map(|idx| CategoryCode(idx as u32))
            .ok_or_else(|| DomainError::invalid_category(self.category, value))
    }

    pub fn labels(&self) -> &'static [&'static str] {
        self.labels
    }

    /// Labels paired with their codes, in code order
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, CategoryCode)> + '_ {
        self.labels
            .iter()
            .enumerate()
            .map(|(idx, label)| (*label, CategoryCode(idx as u32)))
    }
}

pub static TOWNS: CategoryTable = CategoryTable::new(
    Category::Town,
    &[
        "ANG MO KIO",
        "BEDOK",
        "BISHAN",
        "BUKIT BATOK",
        "BUKIT MERAH",
        "BUKIT PANJANG",
        "BUKIT TIMAH",
        "CENTRAL AREA",
        "CHOA CHU KANG",
        "CLEMENTI",
        "GEYLANG",
        "HOUGANG",
        "JURONG EAST",
        "JURONG WEST",
        "KALLANG/WHAMPOA",
        "MARINE PARADE",
        "PASIR RIS",
        "PUNGGOL",
        "QUEENSTOWN",
        "SEMBAWANG",
        "SENGKANG",
        "SERANGOON",
        "TAMPINES",
        "TOA PAYOH",
        "WOODLANDS",
        "YISHUN",
    ],
);

pub static FLAT_TYPES: CategoryTable = CategoryTable::new(
    Category::FlatType,
    &[
        "1 ROOM",
        "2 ROOM",
        "3 ROOM",
        "4 ROOM",
        "5 ROOM",
        "EXECUTIVE",
        "MULTI-GENERATION",
    ],
);

pub static FLAT_MODELS: CategoryTable = CategoryTable::new(
    Category::FlatModel,
    &[
        "2-room",
        "3Gen",
        "Adjoined flat",
        "Apartment",
        "DBSS",
        "Improved",
        "Improved-Maisonette",
        "Maisonette",
        "Model A",
        "Model A-Maisonette",
        "Model A2",
        "Multi Generation",
        "New Generation",
        "Premium Apartment",
        "Premium Apartment Loft",
        "Premium Maisonette",
        "Simplified",
        "Standard",
        "Terrace",
        "Type S1",
        "Type S2",
    ],
);

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(TOWNS.labels().len(), 26);
        assert_eq!(FLAT_TYPES.labels().len(), 7);
        assert_eq!(FLAT_MODELS.labels().len(), 21);
    }

    #[test]
    fn test_documented_codes() {
        assert_eq!(TOWNS.encode("ANG MO KIO").unwrap().value(), 0);
        assert_eq!(TOWNS.encode("KALLANG/WHAMPOA").unwrap().value(), 14);
        assert_eq!(TOWNS.encode("YISHUN").unwrap().value(), 25);

        assert_eq!(FLAT_TYPES.encode("1 ROOM").unwrap().value(), 0);
        assert_eq!(FLAT_TYPES.encode("4 ROOM").unwrap().value(), 3);
        assert_eq!(FLAT_TYPES.encode("MULTI-GENERATION").unwrap().value(), 6);

        assert_eq!(FLAT_MODELS.encode("2-room").unwrap().value(), 0);
        assert_eq!(FLAT_MODELS.encode("Model A").unwrap().value(), 8);
        assert_eq!(FLAT_MODELS.encode("Type S2").unwrap().value(), 20);
    }

    #[test]
    fn test_tables_are_bijections_onto_dense_ranges() {
        for table in [&TOWNS, &FLAT_TYPES, &FLAT_MODELS] {
            let unique: HashSet<_> = table.labels().iter().collect();
            assert_eq!(unique.len(), table.labels().len(), "duplicate label in {}", table.category());

            for (expected, (label, code)) in table.entries().enumerate() {
                assert_eq!(code.value() as usize, expected);
                assert_eq!(table.encode(label).unwrap(), code);
                assert_eq!(table.labels()[code.value() as usize], label);
            }
        }
    }

    #[test]
    fn test_exact_match_only() {
        assert!(TOWNS.encode("ang mo kio").is_err());
        assert!(TOWNS.encode(" ANG MO KIO").is_err());
        assert!(TOWNS.encode("ANG MO KIO ").is_err());
        assert!(FLAT_MODELS.encode("MODEL A").is_err());
        assert!(FLAT_TYPES.encode("4 room").is_err());
        assert!(FLAT_TYPES.encode("").is_err());
    }

    #[test]
    fn test_unknown_value_carries_category_and_value() {
        let err = TOWNS.encode("NON-EXISTENT").unwrap_err();

        match err {
            DomainError::InvalidCategoryValue { category, value } => {
                assert_eq!(category, Category::Town);
                assert_eq!(value, "NON-EXISTENT");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_entries_stop_at_last_code() {
        let last = FLAT_TYPES.entries().last().unwrap();
        assert_eq!(last, ("MULTI-GENERATION", CategoryCode(6)));
    }
}
