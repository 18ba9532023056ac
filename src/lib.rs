//! # Gdpanel
//!
//! Core pipeline behind a pair of small interactive dashboards: a World
//! Bank GDP panel and a clinic revenue benchmark check. Charting and
//! widget rendering are external collaborators; this crate owns the
//! data logic between the raw files and the display.
//!
//! ## Features
//!
//! - **Wide-to-long reshape**: pivots the World Bank export into flat
//!   (country, year, value) observations
//! - **Load-once caching**: re-reads the source only when its path or
//!   modification time changes
//! - **Pure filtering**: year-range and country-set selection
//! - **Total growth metrics**: endpoint ratio per country, with an
//!   explicit n/a sentinel instead of NaN or errors
//! - **Benchmark check**: positions a revenue value against regional
//!   percentile buckets, with best-effort remote audit logging
//!
//! ## Modules
//!
//! - [`dataset`]: raw table loading, reshape, and caching
//! - [`panel`]: filtering and growth metric derivation
//! - [`benchmark`]: percentile bucket comparison
//! - [`audit`]: fire-and-forget check logging
//!
//! ## Quick Start
//!
//! ```rust
//! use gdpanel::dataset::WideTableLoader;
//! use gdpanel::panel::{FilterSelection, Panel, YearRange};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let observations = WideTableLoader::new()
//!     .load_str("Country Code,1960,1961\nDEU,100,150\nFRA,90,\n")?;
//!
//! let selection = FilterSelection::new(YearRange::new(1960, 1961)?)
//!     .countries(["DEU", "FRA"]);
//! let panel = Panel::from_observations(&observations, &selection);
//!
//! assert_eq!(panel.series.len(), 4);
//! assert_eq!(panel.metrics[0].growth.to_string(), "1.50x"); // DEU
//! assert_eq!(panel.metrics[1].growth.to_string(), "n/a");   // FRA, 1961 missing
//! # Ok(())
//! # }
//! ```

pub mod audit;
pub mod benchmark;
pub mod config;
pub mod dataset;
pub mod panel;

// Re-export top-level types for convenience
pub use dataset::{
    DatasetCache, DatasetError, DatasetResult, Observation, SourceKey, WideTableLoader,
};

pub use panel::{
    compute_growth, filter, FilterSelection, Growth, GrowthMetric, Panel, PanelBuilder,
    PanelError, PanelResult, PanelWarning, YearRange,
};

pub use benchmark::{
    check, compare, BenchmarkError, BenchmarkResult, BucketTable, Comparison, PercentileBucket,
    Position,
};

pub use audit::{
    append_best_effort, AuditClientConfig, AuditError, AuditRecord, AuditSink, HttpAuditClient,
};

pub use config::{Config, ConfigError, LoggingConfig};
