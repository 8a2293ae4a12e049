//! Configuration loading from TOML files.

use std::path::Path;

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};

const BACKENDS: &[&str] = &["memory", "sqlite"];

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Which store backend to use: "memory" or "sqlite".
    pub backend: String,
    /// Path to the SQLite database file (ignored by the memory backend).
    pub database: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: "sqlite".into(),
            database: "rollbook.db".into(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load and validate configuration from a TOML file.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if the file cannot be read or parsed,
    /// or a value fails validation.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file does
    /// not exist. A file that exists but fails to parse is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<()> {
        if !BACKENDS.contains(&self.storage.backend.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "storage.backend",
                reason: format!(
                    "expected one of {BACKENDS:?}, got {:?}",
                    self.storage.backend
                ),
            }
            .into());
        }
        if self.storage.backend == "sqlite" && self.storage.database.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "storage.database",
            }
            .into());
        }
        Ok(())
    }

    /// Install the global tracing subscriber per the logging section.
    /// `RUST_LOG` overrides the configured level when set.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        // Diagnostics go to stderr; stdout is reserved for command output.
        match self.logging.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}
