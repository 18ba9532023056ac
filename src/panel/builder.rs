//! One render pass over the dataset
//!
//! `PanelBuilder` owns the dataset cache and runs the full pipeline
//! for each interaction: load-if-needed, filter, derive one growth
//! metric per selected country for the endpoint years. The resulting
//! [`Panel`] is everything the rendering collaborator needs: the
//! filtered series for charting, the metrics for the summary cards,
//! and any warnings to show the user.

use super::error::PanelResult;
use super::growth::{compute_growth, GrowthMetric};
use super::selection::{filter, FilterSelection};
use crate::dataset::{DatasetCache, Observation};
use serde::Serialize;
use std::path::PathBuf;

/// Non-fatal conditions to surface in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelWarning {
    /// The country set is empty; the panel will be blank
    NoCountriesSelected,
}

impl std::fmt::Display for PanelWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PanelWarning::NoCountriesSelected => write!(f, "Select at least one country"),
        }
    }
}

/// Output of one recomputation pass
#[derive(Debug, Clone, Serialize)]
pub struct Panel {
    /// Filtered long-format series, ready for charting
    pub series: Vec<Observation>,
    /// One growth metric per selected country
    pub metrics: Vec<GrowthMetric>,
    /// Warnings to display alongside the result
    pub warnings: Vec<PanelWarning>,
}

impl Panel {
    /// Compute a panel from an already-normalized observation set
    ///
    /// Pure: the builder only adds caching on top of this.
    pub fn from_observations(observations: &[Observation], selection: &FilterSelection) -> Self {
        let series = filter(observations, selection);

        let metrics = selection
            .countries
            .iter()
            .map(|country| {
                compute_growth(
                    observations,
                    country,
                    selection.years.from,
                    selection.years.to,
                )
            })
            .collect();

        let mut warnings = Vec::new();
        if selection.is_empty() {
            warnings.push(PanelWarning::NoCountriesSelected);
        }

        Self {
            series,
            metrics,
            warnings,
        }
    }
}

/// Builds panels from a cached dataset file
pub struct PanelBuilder {
    cache: DatasetCache,
    source: PathBuf,
}

impl PanelBuilder {
    /// Create a builder reading from `source`
    pub fn new(cache: DatasetCache, source: PathBuf) -> Self {
        Self { cache, source }
    }

    /// Run one full pass: load-if-needed, filter, derive metrics
    pub fn build(&mut self, selection: &FilterSelection) -> PanelResult<Panel> {
        let observations = self.cache.load(&self.source)?;
        Ok(Panel::from_observations(&observations, selection))
    }

    /// Distinct country codes present in the dataset, sorted
    pub fn countries(&mut self) -> PanelResult<Vec<String>> {
        let observations = self.cache.load(&self.source)?;
        let mut codes: Vec<String> = observations
            .iter()
            .map(|obs| obs.country.clone())
            .collect();
        codes.sort();
        codes.dedup();
        Ok(codes)
    }

    /// Smallest and largest year covered by the dataset, if any
    pub fn year_span(&mut self) -> PanelResult<Option<(i32, i32)>> {
        let observations = self.cache.load(&self.source)?;
        let min = observations.iter().map(|obs| obs.year).min();
        let max = observations.iter().map(|obs| obs.year).max();
        Ok(min.zip(max))
    }
}
