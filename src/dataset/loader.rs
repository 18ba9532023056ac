//! Wide-to-long table reshape
//!
//! The raw World Bank export has one row per country and one column per
//! year ("1960" .. "2022"), plus assorted metadata columns. The loader
//! pivots that into a flat sequence of [`Observation`]s, one per
//! (country, year-column) cell.
//!
//! Column policy:
//! - A header starting with an ASCII digit is treated as a year label
//!   and must parse as an integer, otherwise loading fails with
//!   [`DatasetError::YearColumn`].
//! - Year columns outside the configured `[min_year, max_year]` range
//!   are dropped. This trims the dataset to the supported window; the
//!   drop is logged at debug level, not an error.
//! - Any other header is a metadata column and is skipped.
//! - Blank or non-numeric cells become `value: None`, never an error.

use super::error::{DatasetError, DatasetResult};
use super::types::{Observation, DEFAULT_MAX_YEAR, DEFAULT_MIN_YEAR};
use std::path::Path;

/// Loader for wide-format CSV tables with configurable year bounds
#[derive(Debug, Clone)]
pub struct WideTableLoader {
    /// Header of the column holding country identifiers
    country_column: String,
    /// First year column to keep
    min_year: i32,
    /// Last year column to keep
    max_year: i32,
}

impl Default for WideTableLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl WideTableLoader {
    /// Create a loader with the World Bank defaults
    pub fn new() -> Self {
        Self {
            country_column: "Country Code".to_string(),
            min_year: DEFAULT_MIN_YEAR,
            max_year: DEFAULT_MAX_YEAR,
        }
    }

    /// Set the header of the country identifier column
    pub fn with_country_column(mut self, header: &str) -> Self {
        self.country_column = header.to_string();
        self
    }

    /// Set the supported year range
    pub fn with_year_range(mut self, min_year: i32, max_year: i32) -> Self {
        self.min_year = min_year;
        self.max_year = max_year;
        self
    }

    /// Load and reshape a CSV file
    pub fn load(&self, path: &Path) -> DatasetResult<Vec<Observation>> {
        let reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)?;
        self.load_reader(reader)
    }

    /// Load and reshape from a CSV string (useful for testing)
    pub fn load_str(&self, csv_data: &str) -> DatasetResult<Vec<Observation>> {
        let reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(csv_data.as_bytes());
        self.load_reader(reader)
    }

    fn load_reader<R: std::io::Read>(
        &self,
        mut reader: csv::Reader<R>,
    ) -> DatasetResult<Vec<Observation>> {
        let headers = reader.headers()?.clone();

        let country_idx = headers
            .iter()
            .position(|h| h.trim() == self.country_column)
            .ok_or_else(|| DatasetError::MissingCountryColumn(self.country_column.clone()))?;

        // Map each column index to the year it carries, if any.
        let mut year_columns: Vec<(usize, i32)> = Vec::new();
        for (idx, header) in headers.iter().enumerate() {
            if idx == country_idx {
                continue;
            }
            let label = header.trim();
            if !label.chars().next().is_some_and(|c| c.is_ascii_digit()) {
                // Metadata column (Country Name, indicator codes, ...)
                continue;
            }
            let year: i32 = label
                .parse()
                .map_err(|_| DatasetError::YearColumn(label.to_string()))?;
            if year < self.min_year || year > self.max_year {
                tracing::debug!(year, "dropping year column outside supported range");
                continue;
            }
            year_columns.push((idx, year));
        }

        let mut observations = Vec::new();
        for result in reader.records() {
            let record = result?;
            let country = match record.get(country_idx) {
                Some(code) if !code.trim().is_empty() => code.trim().to_string(),
                // Rows without a country identifier cannot be keyed
                _ => continue,
            };

            for &(idx, year) in &year_columns {
                let value = record
                    .get(idx)
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .and_then(|s| s.parse::<f64>().ok());
                observations.push(Observation {
                    country: country.clone(),
                    year,
                    value,
                });
            }
        }

        tracing::debug!(
            observations = observations.len(),
            years = year_columns.len(),
            "reshaped wide table to long format"
        );
        Ok(observations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_reshape_emits_one_observation_per_cell() {
        let csv_data = "Country Name,Country Code,1960,1961
Germany,DEU,100,150
France,FRA,90,95";

        let loader = WideTableLoader::new();
        let obs = loader.load_str(csv_data).unwrap();

        assert_eq!(obs.len(), 4);
        let pairs: HashSet<(&str, i32)> = obs
            .iter()
            .map(|o| (o.country.as_str(), o.year))
            .collect();
        assert_eq!(pairs.len(), 4, "pairs must be unique");
        assert!(pairs.contains(&("DEU", 1960)));
        assert!(pairs.contains(&("FRA", 1961)));
    }

    #[test]
    fn test_blank_cell_becomes_missing_marker() {
        let csv_data = "Country Code,1960,1961
XYZ,,200";

        let obs = WideTableLoader::new().load_str(csv_data).unwrap();
        assert_eq!(obs.len(), 2);
        assert_eq!(obs[0].value, None);
        assert_eq!(obs[1].value, Some(200.0));
    }

    #[test]
    fn test_metadata_columns_are_skipped() {
        let csv_data = "Country Name,Country Code,Indicator Name,1960
Germany,DEU,GDP (current US$),100";

        let obs = WideTableLoader::new().load_str(csv_data).unwrap();
        assert_eq!(obs.len(), 1);
        assert_eq!(obs[0], Observation::new("DEU", 1960, 100.0));
    }

    #[test]
    fn test_out_of_range_year_columns_are_dropped() {
        let csv_data = "Country Code,1959,1960,2023
DEU,1,2,3";

        let obs = WideTableLoader::new().load_str(csv_data).unwrap();
        assert_eq!(obs.len(), 1);
        assert_eq!(obs[0].year, 1960);
    }

    #[test]
    fn test_malformed_year_label_is_an_error() {
        let csv_data = "Country Code,19x0
DEU,100";

        let err = WideTableLoader::new().load_str(csv_data).unwrap_err();
        assert!(matches!(err, DatasetError::YearColumn(label) if label == "19x0"));
    }

    #[test]
    fn test_missing_country_column_is_an_error() {
        let csv_data = "Name,1960
Germany,100";

        let err = WideTableLoader::new().load_str(csv_data).unwrap_err();
        assert!(matches!(err, DatasetError::MissingCountryColumn(_)));
    }

    #[test]
    fn test_rows_without_country_code_are_skipped() {
        let csv_data = "Country Code,1960
DEU,100
,50";

        let obs = WideTableLoader::new().load_str(csv_data).unwrap();
        assert_eq!(obs.len(), 1);
        assert_eq!(obs[0].country, "DEU");
    }

    #[test]
    fn test_custom_year_range() {
        let csv_data = "Country Code,1990,2000,2010
DEU,1,2,3";

        let obs = WideTableLoader::new()
            .with_year_range(2000, 2010)
            .load_str(csv_data)
            .unwrap();
        let years: Vec<i32> = obs.iter().map(|o| o.year).collect();
        assert_eq!(years, vec![2000, 2010]);
    }
}
