//! Growth ratio derivation
//!
//! For each selected country the dashboard shows how its value at the
//! end of the selected range compares to the start: `end / start`.
//! Anything that prevents the division (missing observation, missing
//! value, zero or NaN start) maps to [`Growth::NotAvailable`] instead
//! of an error; the computation is total and never panics.

use crate::dataset::Observation;
use serde::Serialize;

/// Growth between two endpoint years
///
/// The "n/a" sentinel is its own variant, keeping "not computable"
/// distinct from any ratio that happens to be computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "value")]
pub enum Growth {
    /// `end / start` was computable
    Ratio(f64),
    /// Endpoint missing, start zero, or value NaN
    NotAvailable,
}

impl Growth {
    /// Whether the two endpoints were comparable
    pub fn is_comparable(&self) -> bool {
        matches!(self, Growth::Ratio(_))
    }
}

impl std::fmt::Display for Growth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Growth::Ratio(ratio) => write!(f, "{:.2}x", ratio),
            Growth::NotAvailable => write!(f, "n/a"),
        }
    }
}

/// Growth summary for one country over the selected range
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthMetric {
    pub country: String,
    pub start_value: Option<f64>,
    pub end_value: Option<f64>,
    pub growth: Growth,
}

/// Derive the growth metric for one country between two years
///
/// Looks up the observation for each endpoint year; the reshape
/// guarantees at most one match per (country, year). Total: every
/// non-computable case resolves to `Growth::NotAvailable`.
pub fn compute_growth(
    observations: &[Observation],
    country: &str,
    from_year: i32,
    to_year: i32,
) -> GrowthMetric {
    let lookup = |year: i32| {
        observations
            .iter()
            .find(|obs| obs.country == country && obs.year == year)
            .and_then(|obs| obs.value)
    };

    let start_value = lookup(from_year);
    let end_value = lookup(to_year);

    let growth = match (start_value, end_value) {
        (Some(start), Some(end)) if start != 0.0 && !start.is_nan() && !end.is_nan() => {
            Growth::Ratio(end / start)
        }
        _ => Growth::NotAvailable,
    };

    GrowthMetric {
        country: country.to_string(),
        start_value,
        end_value,
        growth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_ratio_for_present_endpoints() {
        let obs = vec![
            Observation::new("DEU", 1960, 100.0),
            Observation::new("DEU", 1961, 150.0),
        ];

        let metric = compute_growth(&obs, "DEU", 1960, 1961);
        assert_eq!(metric.start_value, Some(100.0));
        assert_eq!(metric.end_value, Some(150.0));
        assert_eq!(metric.growth, Growth::Ratio(1.5));
    }

    #[test]
    fn test_missing_start_value_is_not_comparable() {
        let obs = vec![
            Observation::missing("XYZ", 1960),
            Observation::new("XYZ", 1961, 200.0),
        ];

        let metric = compute_growth(&obs, "XYZ", 1960, 1961);
        assert_eq!(metric.growth, Growth::NotAvailable);
        assert!(!metric.growth.is_comparable());
    }

    #[test]
    fn test_absent_observation_is_not_comparable() {
        let obs = vec![Observation::new("DEU", 1961, 150.0)];

        let metric = compute_growth(&obs, "DEU", 1960, 1961);
        assert_eq!(metric.start_value, None);
        assert_eq!(metric.growth, Growth::NotAvailable);
    }

    #[test]
    fn test_zero_start_is_not_comparable() {
        let obs = vec![
            Observation::new("ABW", 1960, 0.0),
            Observation::new("ABW", 1961, 50.0),
        ];

        let metric = compute_growth(&obs, "ABW", 1960, 1961);
        assert_eq!(metric.growth, Growth::NotAvailable);
    }

    #[test]
    fn test_nan_start_is_not_comparable() {
        let obs = vec![
            Observation::new("ABW", 1960, f64::NAN),
            Observation::new("ABW", 1961, 50.0),
        ];

        let metric = compute_growth(&obs, "ABW", 1960, 1961);
        assert_eq!(metric.growth, Growth::NotAvailable);
    }

    #[test]
    fn test_unknown_country_is_total_not_a_panic() {
        let metric = compute_growth(&[], "ZZZ", 1960, 2022);
        assert_eq!(metric.growth, Growth::NotAvailable);
        assert_eq!(metric.country, "ZZZ");
    }

    #[test]
    fn test_growth_display() {
        assert_eq!(Growth::Ratio(1.5).to_string(), "1.50x");
        assert_eq!(Growth::NotAvailable.to_string(), "n/a");
    }
}
