//! Asset server configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Asset server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory assets are served from. "." means the working directory.
    pub root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8765,
            root: PathBuf::from("."),
        }
    }
}
