//! Dataset generator configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Dataset generator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Output CSV path. The parent directory must already exist.
    pub output: PathBuf,
    /// Hours of history to synthesize. Produces `history_hours + 1`
    /// hourly snapshots, oldest first, ending at the current time.
    pub history_hours: u32,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("../data/hospital_enterprise.csv"),
            history_hours: 24,
        }
    }
}
