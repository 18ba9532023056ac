//! Percentile bucket table
//!
//! Buckets are precomputed offline and shipped as a CSV with one row
//! per (region, year): `region,year,p25,median,p90`. The table is
//! loaded once and queried by exact (region, year) key.

use super::{BenchmarkError, BenchmarkResult};
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

/// Peer statistics for one region and year
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PercentileBucket {
    /// 25th percentile of peer revenue
    pub p25: f64,
    /// Median peer revenue
    pub median: f64,
    /// 90th percentile of peer revenue
    pub p90: f64,
}

/// All known buckets, keyed by (region, year)
#[derive(Debug, Clone, Default)]
pub struct BucketTable {
    buckets: HashMap<(String, i32), PercentileBucket>,
}

impl BucketTable {
    /// Load a bucket table from a CSV file
    pub fn from_path(path: &Path) -> BenchmarkResult<Self> {
        let reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)?;
        Self::from_reader(reader)
    }

    /// Load a bucket table from a CSV string (useful for testing)
    pub fn from_csv_str(csv_data: &str) -> BenchmarkResult<Self> {
        let reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(csv_data.as_bytes());
        Self::from_reader(reader)
    }

    fn from_reader<R: std::io::Read>(mut reader: csv::Reader<R>) -> BenchmarkResult<Self> {
        let mut buckets = HashMap::new();

        for (line_num, result) in reader.records().enumerate() {
            let line = line_num + 2; // header is line 1
            let record = result?;

            let field = |idx: usize, name: &str| -> BenchmarkResult<String> {
                record
                    .get(idx)
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .ok_or_else(|| BenchmarkError::MalformedRow {
                        line,
                        message: format!("missing {}", name),
                    })
            };
            let numeric = |idx: usize, name: &str| -> BenchmarkResult<f64> {
                let raw = field(idx, name)?;
                raw.parse().map_err(|_| BenchmarkError::MalformedRow {
                    line,
                    message: format!("non-numeric {}: {:?}", name, raw),
                })
            };

            let region = field(0, "region")?;
            let year: i32 =
                field(1, "year")?
                    .parse()
                    .map_err(|_| BenchmarkError::MalformedRow {
                        line,
                        message: "non-numeric year".to_string(),
                    })?;

            let bucket = PercentileBucket {
                p25: numeric(2, "p25")?,
                median: numeric(3, "median")?,
                p90: numeric(4, "p90")?,
            };
            buckets.insert((region, year), bucket);
        }

        tracing::debug!(buckets = buckets.len(), "loaded benchmark buckets");
        Ok(Self { buckets })
    }

    /// Look up the bucket for a region and year
    pub fn get(&self, region: &str, year: i32) -> Option<&PercentileBucket> {
        self.buckets.get(&(region.to_string(), year))
    }

    /// Distinct regions present in the table, sorted
    pub fn regions(&self) -> Vec<String> {
        let mut regions: Vec<String> = self.buckets.keys().map(|(r, _)| r.clone()).collect();
        regions.sort();
        regions.dedup();
        regions
    }

    /// Number of buckets loaded
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "region,year,p25,median,p90
seoul,2024,120000,180000,310000
busan,2024,90000,140000,220000
seoul,2023,110000,170000,290000";

    #[test]
    fn test_load_buckets_from_csv() {
        let table = BucketTable::from_csv_str(SAMPLE).unwrap();
        assert_eq!(table.len(), 3);

        let bucket = table.get("seoul", 2024).unwrap();
        assert_eq!(bucket.p25, 120000.0);
        assert_eq!(bucket.median, 180000.0);
        assert_eq!(bucket.p90, 310000.0);

        assert!(table.get("seoul", 1999).is_none());
        assert_eq!(table.regions(), vec!["busan", "seoul"]);
    }

    #[test]
    fn test_malformed_row_reports_line_number() {
        let csv_data = "region,year,p25,median,p90
seoul,2024,oops,180000,310000";

        let err = BucketTable::from_csv_str(csv_data).unwrap_err();
        match err {
            BenchmarkError::MalformedRow { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("p25"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_column_is_malformed() {
        let csv_data = "region,year,p25,median,p90
seoul,2024,120000";

        let err = BucketTable::from_csv_str(csv_data).unwrap_err();
        match err {
            BenchmarkError::MalformedRow { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("missing median"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
