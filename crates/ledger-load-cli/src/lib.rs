//! # Ledger-Load CLI
//!
//! Command-line interface for the ledger-load synthetic workload
//! generator.
//!
//! This module provides CLI commands for:
//! - Running a load scenario against a financial-records API
//! - Validating and inspecting the resolved configuration

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::info;

use finrec_sdk::FinrecClient;
use ledger_load_core::{RecordsApi, Scenario};

pub mod config;
pub mod harness;

pub use config::{ConfigError, LoadConfig};
pub use harness::Harness;

// ============================================================================
// CLI Structure
// ============================================================================

/// Ledger-Load CLI - synthetic load for a financial-records API
#[derive(Parser)]
#[command(name = "ledger-load")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Synthetic workload generator for a financial-records API")]
#[command(
    long_about = "Ledger-Load drives a financial-records API with tag fixtures, \
                  randomized record creation, and cash-flow report reads under \
                  configurable concurrency and duration"
)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "LEDGER_LOAD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Logging level (overrides configuration)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long)]
    pub json_logs: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run a load scenario against the target API
    Run {
        /// Scenario to execute
        #[arg(short, long, default_value = "populate")]
        scenario: ScenarioArg,

        /// Number of virtual workers (overrides configuration)
        #[arg(short, long)]
        workers: Option<usize>,

        /// Run duration in seconds (overrides configuration)
        #[arg(short, long)]
        duration_seconds: Option<u64>,

        /// Target API base URL (overrides configuration)
        #[arg(short, long)]
        base_url: Option<String>,
    },

    /// Validate configuration
    Config {
        /// Configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Show resolved configuration
        #[arg(short, long)]
        show: bool,
    },
}

/// Scenario selector as exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScenarioArg {
    /// Tag fixtures plus chunked single-record creation
    Populate,
    /// Report reads plus bulk record creation
    CashFlow,
}

impl From<ScenarioArg> for Scenario {
    fn from(arg: ScenarioArg) -> Self {
        match arg {
            ScenarioArg::Populate => Scenario::Populate,
            ScenarioArg::CashFlow => Scenario::CashFlow,
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Top-level CLI errors, mapped to exit codes in `main`.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// The API client could not be constructed.
    #[error("Client error: {0}")]
    Client(#[from] finrec_sdk::ApiError),

    /// A command-line argument is unusable.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Rendering the resolved configuration failed.
    #[error("Render error: {0}")]
    Render(#[from] toml::ser::Error),

    /// Filesystem or stream error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// ============================================================================
// Entry point
// ============================================================================

/// Parse arguments and execute the selected command.
///
/// # Errors
///
/// Returns `CliError` for configuration, client, and argument failures;
/// workload failures never surface here — they degrade the run and show up
/// in the check report instead.
pub async fn run_cli() -> Result<(), CliError> {
    let cli = Cli::parse();
    let config_path = cli.config;
    let log_level = cli.log_level;
    let json_logs = cli.json_logs;

    match cli.command {
        Commands::Run {
            scenario,
            workers,
            duration_seconds,
            base_url,
        } => {
            let mut load_config = LoadConfig::load(config_path.as_deref())?;

            // Command-line flags override the layered configuration.
            if let Some(workers) = workers {
                load_config.workload.workers = workers;
            }
            if let Some(duration_seconds) = duration_seconds {
                load_config.workload.duration_seconds = duration_seconds;
            }
            if let Some(base_url) = base_url {
                load_config.target.base_url = base_url;
            }
            load_config
                .validate()
                .map_err(|e| CliError::Configuration(e.into()))?;

            initialize_logging(log_level.as_deref(), json_logs, &load_config)?;
            execute_run_command(scenario.into(), &load_config).await
        }

        Commands::Config { file, show } => {
            let path = file.or(config_path);
            let load_config = LoadConfig::load(path.as_deref())?;
            load_config
                .validate()
                .map_err(|e| CliError::Configuration(e.into()))?;

            if show {
                println!("{}", toml::to_string_pretty(&load_config)?);
            } else {
                println!("configuration OK");
            }
            Ok(())
        }
    }
}

// ============================================================================
// Command Implementations
// ============================================================================

/// Initialize logging from CLI flags and the resolved configuration.
fn initialize_logging(
    log_level: Option<&str>,
    json_logs: bool,
    load_config: &LoadConfig,
) -> Result<(), CliError> {
    let level = log_level.unwrap_or(&load_config.logging.level);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .map_err(|e| CliError::InvalidArgument {
            message: format!("Invalid log level '{}': {}", level, e),
        })?;

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    // try_init: a second initialization (tests) is harmless.
    if json_logs || load_config.logging.json_format {
        let _ = subscriber.json().try_init();
    } else {
        let _ = subscriber.try_init();
    }

    Ok(())
}

/// Build the client and run the harness for the configured duration.
async fn execute_run_command(scenario: Scenario, load_config: &LoadConfig) -> Result<(), CliError> {
    info!(
        base_url = %load_config.target.base_url,
        workers = load_config.workload.workers,
        duration_seconds = load_config.workload.duration_seconds,
        "Configured load run"
    );

    let client = FinrecClient::new(load_config.client_config())?;
    let api: Arc<dyn RecordsApi> = Arc::new(client);

    let harness = Harness::new(
        api,
        load_config.workload_settings(),
        load_config.workload.workers,
        load_config.duration(),
    );
    let report = harness.run(scenario).await;

    // The run itself never fails; the report is the outcome.
    print!("{}", report);
    Ok(())
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
