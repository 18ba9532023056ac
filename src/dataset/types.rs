//! Core data types for the normalized dataset
//!
//! The wide input table is reshaped into a flat sequence of
//! `Observation`s, one per (country, year) cell. This is the only type
//! the filtering and growth layers ever see.

use serde::{Deserialize, Serialize};

/// First year column the loader accepts by default.
pub const DEFAULT_MIN_YEAR: i32 = 1960;

/// Last year column the loader accepts by default.
pub const DEFAULT_MAX_YEAR: i32 = 2022;

/// A single long-format observation
///
/// One per (country, year) pair present in the raw table. The reshape
/// guarantees the pair is unique within one loaded dataset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Observation {
    /// Stable country identifier (e.g. "DEU")
    pub country: String,
    /// Calendar year the value belongs to
    pub year: i32,
    /// Measured value; `None` is the explicit missing-data marker
    pub value: Option<f64>,
}

impl Observation {
    /// Create an observation with a present value
    pub fn new(country: impl Into<String>, year: i32, value: f64) -> Self {
        Self {
            country: country.into(),
            year,
            value: Some(value),
        }
    }

    /// Create an observation whose value is missing
    pub fn missing(country: impl Into<String>, year: i32) -> Self {
        Self {
            country: country.into(),
            year,
            value: None,
        }
    }

    /// Whether this observation carries a usable value
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observation_constructors() {
        let obs = Observation::new("DEU", 1960, 100.0);
        assert_eq!(obs.country, "DEU");
        assert_eq!(obs.year, 1960);
        assert_eq!(obs.value, Some(100.0));
        assert!(obs.has_value());

        let gap = Observation::missing("XYZ", 1961);
        assert_eq!(gap.value, None);
        assert!(!gap.has_value());
    }

    #[test]
    fn test_observation_serde_roundtrip() {
        let obs = Observation::new("FRA", 2000, 1.5e12);
        let json = serde_json::to_string(&obs).unwrap();
        let back: Observation = serde_json::from_str(&json).unwrap();
        assert_eq!(obs, back);
    }
}
