//! Positioning a revenue value against a bucket
//!
//! The comparison is pure and total: one revenue value against one
//! bucket yields exactly one position. Negative revenue is accepted
//! as-is; the domain says it never happens but nothing enforces it.

use super::{BenchmarkError, BenchmarkResult, BucketTable, PercentileBucket};
use serde::Serialize;

/// Where a value sits relative to the peer band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    /// Below the 25th percentile of peers
    BelowP25,
    /// Inside the 25th-90th percentile band, boundaries included
    WithinBand,
    /// Above the 90th percentile of peers
    AboveP90,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::BelowP25 => write!(f, "below the 25th percentile"),
            Position::WithinBand => write!(f, "within the peer band"),
            Position::AboveP90 => write!(f, "above the 90th percentile"),
        }
    }
}

/// Result of one benchmark check, ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub region: String,
    pub year: i32,
    pub revenue: f64,
    pub bucket: PercentileBucket,
    pub position: Position,
}

/// Position one revenue value against a bucket
pub fn compare(revenue: f64, bucket: &PercentileBucket) -> Position {
    if revenue < bucket.p25 {
        Position::BelowP25
    } else if revenue > bucket.p90 {
        Position::AboveP90
    } else {
        Position::WithinBand
    }
}

/// Run a full check: look up the bucket, compare, package the result
///
/// An unknown (region, year) pair is the one error case; the
/// comparison itself cannot fail.
pub fn check(
    table: &BucketTable,
    region: &str,
    year: i32,
    revenue: f64,
) -> BenchmarkResult<Comparison> {
    let bucket = table
        .get(region, year)
        .ok_or_else(|| BenchmarkError::UnknownBucket {
            region: region.to_string(),
            year,
        })?;

    Ok(Comparison {
        region: region.to_string(),
        year,
        revenue,
        bucket: *bucket,
        position: compare(revenue, bucket),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket() -> PercentileBucket {
        PercentileBucket {
            p25: 100.0,
            median: 150.0,
            p90: 300.0,
        }
    }

    #[test]
    fn test_compare_positions() {
        assert_eq!(compare(50.0, &bucket()), Position::BelowP25);
        assert_eq!(compare(150.0, &bucket()), Position::WithinBand);
        assert_eq!(compare(400.0, &bucket()), Position::AboveP90);
    }

    #[test]
    fn test_band_boundaries_are_inclusive() {
        assert_eq!(compare(100.0, &bucket()), Position::WithinBand);
        assert_eq!(compare(300.0, &bucket()), Position::WithinBand);
    }

    #[test]
    fn test_negative_revenue_is_accepted() {
        assert_eq!(compare(-10.0, &bucket()), Position::BelowP25);
    }

    #[test]
    fn test_check_unknown_bucket_is_an_error() {
        let table = BucketTable::from_csv_str("region,year,p25,median,p90\nseoul,2024,100,150,300")
            .unwrap();

        let err = check(&table, "jeju", 2024, 150.0).unwrap_err();
        assert!(matches!(
            err,
            BenchmarkError::UnknownBucket { region, year: 2024 } if region == "jeju"
        ));
    }

    #[test]
    fn test_check_packages_comparison() {
        let table = BucketTable::from_csv_str("region,year,p25,median,p90\nseoul,2024,100,150,300")
            .unwrap();

        let cmp = check(&table, "seoul", 2024, 320.0).unwrap();
        assert_eq!(cmp.position, Position::AboveP90);
        assert_eq!(cmp.bucket.median, 150.0);
    }
}
