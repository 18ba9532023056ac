//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use crate::dataset::{DEFAULT_MAX_YEAR, DEFAULT_MIN_YEAR};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub panel: PanelConfig,

    #[serde(default)]
    pub benchmark: BenchmarkConfig,

    #[serde(default)]
    pub audit: AuditConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dataset source configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_gdp_path")]
    pub gdp_path: PathBuf,

    #[serde(default = "default_country_column")]
    pub country_column: String,

    #[serde(default = "default_min_year")]
    pub min_year: i32,

    #[serde(default = "default_max_year")]
    pub max_year: i32,
}

fn default_gdp_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|p| p.join("gdpanel").join("gdp_data.csv"))
        .unwrap_or_else(|| PathBuf::from("./data/gdp_data.csv"))
}

fn default_country_column() -> String {
    "Country Code".to_string()
}

fn default_min_year() -> i32 {
    DEFAULT_MIN_YEAR
}

fn default_max_year() -> i32 {
    DEFAULT_MAX_YEAR
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            gdp_path: default_gdp_path(),
            country_column: default_country_column(),
            min_year: default_min_year(),
            max_year: default_max_year(),
        }
    }
}

/// Panel display defaults
#[derive(Debug, Clone, Deserialize)]
pub struct PanelConfig {
    #[serde(default = "default_countries")]
    pub default_countries: Vec<String>,
}

fn default_countries() -> Vec<String> {
    ["DEU", "FRA", "GBR", "BRA", "MEX", "JPN"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            default_countries: default_countries(),
        }
    }
}

/// Benchmark bucket table configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BenchmarkConfig {
    #[serde(default = "default_buckets_path")]
    pub buckets_path: PathBuf,
}

fn default_buckets_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|p| p.join("gdpanel").join("benchmark_buckets.csv"))
        .unwrap_or_else(|| PathBuf::from("./data/benchmark_buckets.csv"))
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            buckets_path: default_buckets_path(),
        }
    }
}

/// Audit sink configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuditConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_audit_url")]
    pub base_url: String,

    #[serde(default = "default_audit_collection")]
    pub collection: String,

    #[serde(default = "default_audit_timeout")]
    pub request_timeout_ms: u64,
}

fn default_audit_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_audit_collection() -> String {
    "benchmark_checks".to_string()
}

fn default_audit_timeout() -> u64 {
    5000
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: default_audit_url(),
            collection: default_audit_collection(),
            request_timeout_ms: default_audit_timeout(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Build a configuration from defaults and environment variables
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("gdpanel").join("config.toml")),
            Some(PathBuf::from("/etc/gdpanel/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // Dataset overrides
        if let Ok(path) = std::env::var("GDPANEL_GDP_PATH") {
            self.dataset.gdp_path = PathBuf::from(path);
        }

        // Benchmark overrides
        if let Ok(path) = std::env::var("GDPANEL_BUCKETS_PATH") {
            self.benchmark.buckets_path = PathBuf::from(path);
        }

        // Audit overrides
        if let Ok(url) = std::env::var("GDPANEL_AUDIT_URL") {
            self.audit.base_url = url;
        }
        if let Ok(enabled) = std::env::var("GDPANEL_AUDIT_ENABLED") {
            if let Ok(flag) = enabled.parse() {
                self.audit.enabled = flag;
            }
        }

        // Logging overrides
        if let Ok(level) = std::env::var("GDPANEL_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("GDPANEL_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Gdpanel Configuration
#
# Environment variables override these settings:
# - GDPANEL_GDP_PATH
# - GDPANEL_BUCKETS_PATH
# - GDPANEL_AUDIT_URL
# - GDPANEL_AUDIT_ENABLED
# - GDPANEL_LOG_LEVEL
# - GDPANEL_LOG_FORMAT

[dataset]
# Wide-format World Bank GDP export
gdp_path = "./data/gdp_data.csv"

# Header of the country identifier column
country_column = "Country Code"

# Supported year window; columns outside it are dropped
min_year = 1960
max_year = 2022

[panel]
# Countries preselected when no explicit selection is given
default_countries = ["DEU", "FRA", "GBR", "BRA", "MEX", "JPN"]

[benchmark]
# Precomputed percentile buckets, one row per (region, year)
buckets_path = "./data/benchmark_buckets.csv"

[audit]
# Log confirmed benchmark checks to a remote document store
enabled = false
base_url = "http://localhost:8080"
collection = "benchmark_checks"
request_timeout_ms = 5000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty, json
format = "pretty"
"#
    .to_string()
}
