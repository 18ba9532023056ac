//! Wide-format dataset loading and normalization
//!
//! This module turns a raw wide-format table (one row per country, one
//! column per year) into a flat sequence of [`Observation`]s, the
//! long-format unit everything downstream consumes:
//! - [`WideTableLoader`]: CSV reshape with configurable year bounds
//! - [`DatasetCache`]: load-once cache keyed by source identity
//! - [`Observation`]: one (country, year, value) cell

mod cache;
mod error;
mod loader;
mod types;

pub use cache::{DatasetCache, SourceKey};
pub use error::{DatasetError, DatasetResult};
pub use loader::WideTableLoader;
pub use types::{Observation, DEFAULT_MAX_YEAR, DEFAULT_MIN_YEAR};
