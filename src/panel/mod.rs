//! Panel computation: filtering and growth metrics
//!
//! One user interaction is one synchronous pass over the normalized
//! observation set:
//!
//! ```text
//! Observations → filter(selection) → series
//!                                  → compute_growth per country → metrics
//! ```
//!
//! - [`FilterSelection`]: the year range and country set a user picked
//! - [`filter`]: pure subset of the observation sequence
//! - [`compute_growth`]: total growth-ratio derivation, n/a on gaps
//! - [`PanelBuilder`]: ties load, filter and metrics into one pass

mod builder;
mod error;
mod growth;
mod selection;

pub use builder::{Panel, PanelBuilder, PanelWarning};
pub use error::{PanelError, PanelResult};
pub use growth::{compute_growth, Growth, GrowthMetric};
pub use selection::{filter, FilterSelection, YearRange};
