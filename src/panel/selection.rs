//! User selection and the filter operation
//!
//! The UI collaborator hands us a year range and a set of country
//! codes; `filter` returns the matching subset of the observation
//! sequence. The function is pure: no mutation, same inputs always
//! produce the same output.

use super::error::{PanelError, PanelResult};
use crate::dataset::Observation;
use std::collections::BTreeSet;

/// An inclusive year range with `from <= to`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub from: i32,
    pub to: i32,
}

impl YearRange {
    /// Create a validated range
    ///
    /// Only reversal is an error. Years outside the dataset's supported
    /// window are accepted; they simply match no observations.
    pub fn new(from: i32, to: i32) -> PanelResult<Self> {
        if from > to {
            return Err(PanelError::InvalidYearRange { from, to });
        }
        Ok(Self { from, to })
    }

    /// Whether `year` falls inside the range
    pub fn contains(&self, year: i32) -> bool {
        self.from <= year && year <= self.to
    }
}

/// What the user currently has selected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    /// Inclusive year range
    pub years: YearRange,
    /// Selected country codes; empty is a warning state, not an error
    pub countries: BTreeSet<String>,
}

impl FilterSelection {
    /// Selection with no countries yet
    pub fn new(years: YearRange) -> Self {
        Self {
            years,
            countries: BTreeSet::new(),
        }
    }

    /// Builder method: add one country code
    pub fn country(mut self, code: impl Into<String>) -> Self {
        self.countries.insert(code.into());
        self
    }

    /// Builder method: add many country codes
    pub fn countries<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.countries.extend(codes.into_iter().map(Into::into));
        self
    }

    /// Whether the country set is empty (the warning state)
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

/// Return the observations matching a selection
///
/// Pure subset: an observation survives iff its year is inside the
/// range and its country is in the selected set. An empty country set
/// yields an empty result; surfacing the warning is the caller's job.
pub fn filter(observations: &[Observation], selection: &FilterSelection) -> Vec<Observation> {
    observations
        .iter()
        .filter(|obs| {
            selection.years.contains(obs.year) && selection.countries.contains(&obs.country)
        })
        .cloned()
        .collect()
}
