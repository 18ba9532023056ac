//! Gdpanel CLI
//!
//! Command-line boundary for the dashboard core:
//! - Build the GDP panel for a year range and country selection
//! - List covered countries and years
//! - Run a revenue benchmark check, with optional audit logging

use anyhow::Context;
use clap::{Parser, Subcommand};
use gdpanel::audit::{append_best_effort, AuditClientConfig, AuditRecord, HttpAuditClient};
use gdpanel::benchmark::BucketTable;
use gdpanel::config::{generate_default_config, Config};
use gdpanel::dataset::{DatasetCache, WideTableLoader};
use gdpanel::panel::{FilterSelection, PanelBuilder, YearRange};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "gdpanel")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "GDP dashboard core: reshape, filter, growth and benchmark checks")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file path (default: standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the GDP panel for a selection
    Show {
        /// First year of the range
        #[arg(long)]
        from: Option<i32>,
        /// Last year of the range
        #[arg(long)]
        to: Option<i32>,
        /// Country codes (default: configured selection)
        countries: Vec<String>,
    },

    /// List country codes present in the dataset
    Countries,

    /// Show the year span covered by the dataset
    Years,

    /// Compare a revenue value against regional benchmarks
    Check {
        /// Benchmark region
        region: String,
        /// Benchmark year
        year: i32,
        /// Self-reported revenue
        revenue: f64,
    },

    /// Print a default config file to stdout
    InitConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    init_logging(&config);

    match cli.command {
        Commands::Show {
            from,
            to,
            countries,
        } => show(&config, &cli.format, from, to, countries),
        Commands::Countries => list_countries(&config),
        Commands::Years => show_years(&config),
        Commands::Check {
            region,
            year,
            revenue,
        } => run_check(&config, &cli.format, &region, year, revenue).await,
        Commands::InitConfig => {
            print!("{}", generate_default_config());
            Ok(())
        }
    }
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| format!("gdpanel={}", config.logging.level)),
    );

    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn panel_builder(config: &Config) -> PanelBuilder {
    let loader = WideTableLoader::new()
        .with_country_column(&config.dataset.country_column)
        .with_year_range(config.dataset.min_year, config.dataset.max_year);
    PanelBuilder::new(DatasetCache::new(loader), config.dataset.gdp_path.clone())
}

fn show(
    config: &Config,
    format: &str,
    from: Option<i32>,
    to: Option<i32>,
    countries: Vec<String>,
) -> anyhow::Result<()> {
    let mut builder = panel_builder(config);

    let years = YearRange::new(
        from.unwrap_or(config.dataset.min_year),
        to.unwrap_or(config.dataset.max_year),
    )?;
    let countries = if countries.is_empty() {
        config.panel.default_countries.clone()
    } else {
        countries
    };
    let selection = FilterSelection::new(years).countries(countries);

    let panel = builder.build(&selection).context("building panel")?;

    for warning in &panel.warnings {
        eprintln!("Warning: {}", warning);
    }

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&panel)?);
        return Ok(());
    }

    println!(
        "{} observations for {}..{}",
        panel.series.len(),
        years.from,
        years.to
    );
    println!();
    println!("{:<8} {:>16} {:>16} {:>8}", "Country", years.from, years.to, "Growth");
    for metric in &panel.metrics {
        let fmt_value = |v: Option<f64>| match v {
            Some(v) => format!("{:.0}", v),
            None => "n/a".to_string(),
        };
        println!(
            "{:<8} {:>16} {:>16} {:>8}",
            metric.country,
            fmt_value(metric.start_value),
            fmt_value(metric.end_value),
            metric.growth.to_string(),
        );
    }

    Ok(())
}

fn list_countries(config: &Config) -> anyhow::Result<()> {
    let mut builder = panel_builder(config);
    for code in builder.countries().context("loading dataset")? {
        println!("{}", code);
    }
    Ok(())
}

fn show_years(config: &Config) -> anyhow::Result<()> {
    let mut builder = panel_builder(config);
    match builder.year_span().context("loading dataset")? {
        Some((min, max)) => println!("{}..{}", min, max),
        None => println!("dataset is empty"),
    }
    Ok(())
}

async fn run_check(
    config: &Config,
    format: &str,
    region: &str,
    year: i32,
    revenue: f64,
) -> anyhow::Result<()> {
    let table = BucketTable::from_path(&config.benchmark.buckets_path)
        .context("loading benchmark buckets")?;

    let comparison = gdpanel::benchmark::check(&table, region, year, revenue)?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
    } else {
        println!(
            "{} in {}: revenue {:.0} is {} (p25 {:.0}, median {:.0}, p90 {:.0})",
            comparison.region,
            comparison.year,
            comparison.revenue,
            comparison.position,
            comparison.bucket.p25,
            comparison.bucket.median,
            comparison.bucket.p90,
        );
    }

    // The check result stands regardless of whether the audit write lands.
    if config.audit.enabled {
        let client = HttpAuditClient::new(AuditClientConfig {
            base_url: config.audit.base_url.clone(),
            collection: config.audit.collection.clone(),
            request_timeout_ms: config.audit.request_timeout_ms,
        })?;

        let record = AuditRecord::now(region, year, revenue);
        if let Some(err) = append_best_effort(&client, &record).await {
            eprintln!("Warning: failed to log check: {}", err);
        }
    }

    Ok(())
}
