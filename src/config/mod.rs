//! Configuration module for the VitalFlow DevKit
//!
//! Provides layered configuration loading from files, environment variables, and defaults.
//!
//! # Configuration Precedence
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`VITALFLOW_*`)
//! 3. Configuration file (TOML)
//! 4. Default values (lowest priority)
//!
//! # Example
//!
//! ```rust
//! use vitalflow::config::DevkitConfig;
//!
//! // Load defaults
//! let config = DevkitConfig::default();
//! assert_eq!(config.server.port, 8765);
//!
//! // Parse from TOML
//! let toml = r#"
//! [server]
//! port = 9000
//! "#;
//! let config: DevkitConfig = toml::from_str(toml).unwrap();
//! assert_eq!(config.server.port, 9000);
//! ```

pub mod dataset;
pub mod error;
pub mod logging;
pub mod server;

pub use dataset::DatasetConfig;
pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use server::ServerConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Unified configuration for the devkit.
///
/// Aggregates the asset server settings, the dataset generator settings,
/// and logging.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DevkitConfig {
    /// Asset server configuration
    pub server: ServerConfig,
    /// Dataset generator configuration
    pub dataset: DatasetConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl DevkitConfig {
    /// Load configuration from a TOML file
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supports VITALFLOW_* environment variables for common settings.
    /// Invalid values are silently ignored (defaults are kept).
    pub fn with_env_overrides(mut self) -> Self {
        // Server settings
        if let Ok(port) = std::env::var("VITALFLOW_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Ok(host) = std::env::var("VITALFLOW_HOST") {
            self.server.host = host;
        }
        if let Ok(root) = std::env::var("VITALFLOW_ROOT") {
            self.server.root = root.into();
        }

        // Dataset settings
        if let Ok(output) = std::env::var("VITALFLOW_OUTPUT") {
            self.dataset.output = output.into();
        }

        // Logging settings
        if let Ok(level) = std::env::var("VITALFLOW_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("VITALFLOW_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation {
                field: "server.port".to_string(),
                message: "port must be non-zero".to_string(),
            });
        }

        if self.dataset.history_hours == 0 {
            return Err(ConfigError::Validation {
                field: "dataset.history_hours".to_string(),
                message: "must synthesize at least one hour of history".to_string(),
            });
        }

        if self.dataset.output.as_os_str().is_empty() {
            return Err(ConfigError::Validation {
                field: "dataset.output".to_string(),
                message: "output path cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}
