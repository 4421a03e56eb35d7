//! Configuration management.
//!
//! Environment-aware loading of [`CoreConfig`]: an optional TOML file named
//! by `ORGDATA_CONFIG`, overridden by `ORGDATA_`-prefixed environment
//! variables (`ORGDATA_HYDRATION__EXISTENCE_PROBE=false` style nesting).
//! All settings have working defaults so embedded and test callers can use
//! `CoreConfig::default()` without touching the filesystem.

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration-related errors with actionable context.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// Configuration file not found at the given path.
    #[error("Configuration file not found: {path}")]
    ConfigFileNotFound { path: PathBuf },

    /// The configuration sources could not be read or merged.
    #[error("Failed to load configuration: {0}")]
    LoadFailure(#[from] config::ConfigError),

    /// A setting carries a value outside its allowed range.
    #[error("Invalid value '{value}' for field '{field}': {context}")]
    InvalidValue {
        field: String,
        value: String,
        context: String,
    },
}

/// Top-level configuration for the hydration core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Deployment environment name (`development`, `test`, `production`).
    pub environment: String,
    pub hydration: HydrationConfig,
    pub logging: LoggingConfig,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            hydration: HydrationConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Knobs for the aggregate hydrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HydrationConfig {
    /// Probe each slot's subcollection with a limit-one list before paying
    /// for the full fetch. Results are identical either way; this only
    /// trades a cheap read for skipping an expensive one on empty slots.
    pub existence_probe: bool,

    /// Upper bound on concurrent foreign-key lookups within one slot.
    pub max_concurrent_lookups: usize,

    /// Optional cap on documents fetched per slot. `None` fetches the
    /// whole subcollection.
    pub list_limit: Option<usize>,
}

impl Default for HydrationConfig {
    fn default() -> Self {
        Self {
            existence_probe: true,
            max_concurrent_lookups: 8,
            list_limit: None,
        }
    }
}

/// Console logging settings consumed by [`logging`](crate::logging).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    pub json_output: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_output: false,
        }
    }
}

impl CoreConfig {
    /// Load configuration from the environment: the file named by
    /// `ORGDATA_CONFIG` (if set), then `ORGDATA_`-prefixed environment
    /// variables on top, then defaults for everything untouched.
    pub fn load() -> Result<Self, ConfigurationError> {
        let mut builder = Config::builder();
        if let Ok(path) = std::env::var("ORGDATA_CONFIG") {
            builder = builder.add_source(File::new(&path, FileFormat::Toml).required(true));
        }
        builder = builder.add_source(
            Environment::with_prefix("ORGDATA")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific TOML file, without environment
    /// overrides.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigurationError::ConfigFileNotFound {
                path: path.to_path_buf(),
            });
        }

        let config: Self = Config::builder()
            .add_source(File::new(&path.to_string_lossy(), FileFormat::Toml).required(true))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.hydration.max_concurrent_lookups == 0 {
            return Err(ConfigurationError::InvalidValue {
                field: "hydration.max_concurrent_lookups".to_string(),
                value: "0".to_string(),
                context: "at least one concurrent lookup is required".to_string(),
            });
        }
        if let Some(0) = self.hydration.list_limit {
            return Err(ConfigurationError::InvalidValue {
                field: "hydration.list_limit".to_string(),
                value: "0".to_string(),
                context: "a zero limit would fetch no documents; omit it instead".to_string(),
            });
        }
        Ok(())
    }
}
