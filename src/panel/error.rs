//! Panel error types

use thiserror::Error;

/// Errors that can occur while building a panel
#[derive(Error, Debug)]
pub enum PanelError {
    /// Year range is reversed (`from > to`)
    #[error("Invalid year range: {from}..{to}")]
    InvalidYearRange { from: i32, to: i32 },

    /// Underlying dataset failed to load
    #[error("Dataset error: {0}")]
    Dataset(#[from] crate::dataset::DatasetError),
}

/// Result type for panel operations
pub type PanelResult<T> = Result<T, PanelError>;
