//! Revenue benchmark comparison
//!
//! The second dashboard lets a clinic operator compare self-reported
//! revenue against regional peer statistics. The statistics are
//! precomputed percentile buckets loaded from a small CSV; the
//! comparison itself is a pure positioning of one value against a
//! bucket. Charting the band is the rendering collaborator's job.

mod buckets;
mod check;

pub use buckets::{BucketTable, PercentileBucket};
pub use check::{check, compare, Comparison, Position};

use thiserror::Error;

/// Errors that can occur while loading buckets or running a check
#[derive(Error, Debug)]
pub enum BenchmarkError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reading or parsing failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A bucket row is missing a column or holds a non-numeric value
    #[error("Malformed bucket row {line}: {message}")]
    MalformedRow { line: usize, message: String },

    /// No bucket exists for the requested region and year
    #[error("No benchmark bucket for region {region:?} in {year}")]
    UnknownBucket { region: String, year: i32 },
}

/// Result type for benchmark operations
pub type BenchmarkResult<T> = Result<T, BenchmarkError>;
