//! Configuration types and loading for the load generator.
//!
//! Sources (applied in order — later sources override earlier ones):
//!  1. `config/ledger-load.toml`            — deployment-local defaults
//!  2. Path given by `--config` / `LEDGER_LOAD_CONFIG` — explicit file
//!  3. Environment variables prefixed `LEDGER_LOAD__` (double-underscore
//!     separator), e.g. `LEDGER_LOAD__WORKLOAD__WORKERS=50`
//!
//! All fields carry serde defaults, so an entirely unconfigured
//! environment produces a valid config with built-in defaults. A malformed
//! file or an environment variable that cannot be coerced to the correct
//! type is a hard error.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use finrec_sdk::client::ClientConfig;
use ledger_load_core::WorkloadSettings;

/// Top-level configuration for a load run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoadConfig {
    /// Target API settings
    pub target: TargetConfig,

    /// Workload shape settings
    pub workload: WorkloadConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Target API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Base URL of the financial-records API
    pub base_url: String,

    /// Per-request timeout in seconds
    pub request_timeout_seconds: u64,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            request_timeout_seconds: 30,
        }
    }
}

/// Workload shape settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadConfig {
    /// Number of virtual workers running in parallel
    pub workers: usize,

    /// Wall-clock duration of the run in seconds
    pub duration_seconds: u64,

    /// Size of the organization pool workers map onto
    pub organizations: u32,

    /// Target tag population per organization
    pub tag_target: u32,

    /// Attempt ceiling for resilient reads
    pub read_attempts: u32,

    /// Chunks of single-record creates per populate iteration
    pub chunk_count: u32,

    /// Records per chunk
    pub chunk_size: u32,

    /// Pause after each chunk in milliseconds
    pub chunk_pause_millis: u64,

    /// Pause at the end of each populate iteration in milliseconds
    pub iteration_pause_millis: u64,

    /// Records per bulk batch in the cash-flow scenario
    pub bulk_batch_size: u32,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            workers: 100,
            duration_seconds: 15,
            organizations: 10,
            tag_target: 32,
            read_attempts: 32,
            chunk_count: 4,
            chunk_size: 8,
            chunk_pause_millis: 500,
            iteration_pause_millis: 1000,
            bulk_batch_size: 10,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Logging level
    pub level: String,

    /// Enable JSON structured logging
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

/// Errors while assembling or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Loading or deserializing the configuration sources failed.
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// The resolved configuration is invalid.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Validation failures in the resolved configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A field value is out of the acceptable range.
    #[error("Value out of range for {field}: {message}")]
    OutOfRange { field: String, message: String },

    /// A field has an invalid format.
    #[error("Invalid format for {field}: {message}")]
    InvalidFormat { field: String, message: String },
}

impl LoadConfig {
    /// Load configuration from the layered sources.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the explicit file is missing, any source
    /// is malformed, or a value cannot be coerced to its field type.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder().add_source(
            config::File::with_name("config/ledger-load")
                .required(false)
                .format(config::FileFormat::Toml),
        );

        if let Some(path) = explicit_path {
            builder = builder.add_source(
                config::File::from(path)
                    .required(true)
                    .format(config::FileFormat::Toml),
            );
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix("LEDGER_LOAD")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        let config: LoadConfig = settings.try_deserialize()?;
        Ok(config)
    }

    /// Validate the resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for zero-valued counts and an unusable
    /// base URL.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let positive_counts: [(&str, u64); 8] = [
            ("workload.workers", self.workload.workers as u64),
            ("workload.duration_seconds", self.workload.duration_seconds),
            ("workload.organizations", u64::from(self.workload.organizations)),
            ("workload.tag_target", u64::from(self.workload.tag_target)),
            ("workload.read_attempts", u64::from(self.workload.read_attempts)),
            ("workload.chunk_count", u64::from(self.workload.chunk_count)),
            ("workload.chunk_size", u64::from(self.workload.chunk_size)),
            (
                "workload.bulk_batch_size",
                u64::from(self.workload.bulk_batch_size),
            ),
        ];
        for (field, value) in positive_counts {
            if value == 0 {
                return Err(ValidationError::OutOfRange {
                    field: field.to_string(),
                    message: "must be at least 1".to_string(),
                });
            }
        }

        let parsed = url::Url::parse(&self.target.base_url).map_err(|e| {
            ValidationError::InvalidFormat {
                field: "target.base_url".to_string(),
                message: e.to_string(),
            }
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ValidationError::InvalidFormat {
                field: "target.base_url".to_string(),
                message: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        Ok(())
    }

    /// Wall-clock duration of the run.
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.workload.duration_seconds)
    }

    /// Workload settings for the core generator.
    pub fn workload_settings(&self) -> WorkloadSettings {
        WorkloadSettings {
            organizations: self.workload.organizations,
            tag_target: self.workload.tag_target,
            read_attempts: self.workload.read_attempts,
            chunk_count: self.workload.chunk_count,
            chunk_size: self.workload.chunk_size,
            chunk_pause: Duration::from_millis(self.workload.chunk_pause_millis),
            iteration_pause: Duration::from_millis(self.workload.iteration_pause_millis),
            bulk_batch_size: self.workload.bulk_batch_size,
        }
    }

    /// Client configuration for the SDK.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::default()
            .with_base_url(self.target.base_url.clone())
            .with_timeout(Duration::from_secs(self.target.request_timeout_seconds))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
