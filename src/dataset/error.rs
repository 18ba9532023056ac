//! Dataset error types
//!
//! Defines all errors that can occur while loading and reshaping the
//! raw table.

use thiserror::Error;

/// Errors that can occur while loading a dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reading or parsing failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A header that should be a year label is not a valid integer
    #[error("Malformed year column: {0:?}")]
    YearColumn(String),

    /// The table has no country code column
    #[error("Missing required column: {0:?}")]
    MissingCountryColumn(String),
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DatasetError::YearColumn("19x0".to_string());
        assert_eq!(err.to_string(), "Malformed year column: \"19x0\"");

        let err = DatasetError::MissingCountryColumn("Country Code".to_string());
        assert_eq!(err.to_string(), "Missing required column: \"Country Code\"");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let ds_err: DatasetError = io_err.into();
        assert!(matches!(ds_err, DatasetError::Io(_)));
    }
}
