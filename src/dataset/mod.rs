//! # Synthetic Ward Dataset
//!
//! Generates the demo hospital-occupancy time series the extension's
//! dashboards are developed against: one reading per ward per hour, covering
//! the trailing day, with a nighttime surge bias on the Emergency ward.
//!
//! The dataset is a throwaway snapshot. Every run overwrites the output CSV;
//! nothing has identity or lifecycle beyond generate-and-write.

pub mod generator;
pub mod writer;

pub use generator::{generate_history, night_surge, status_for};
pub use writer::write_snapshot;

use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// The fixed set of wards the dataset covers.
pub const WARDS: [&str; 8] = [
    "Emergency",
    "ICU",
    "Cardiology",
    "Pediatrics",
    "Oncology",
    "Surgery",
    "Maternity",
    "General",
];

/// Occupancy band derived from the occupancy percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WardStatus {
    Normal,
    High,
    Critical,
}

/// One synthesized reading for a ward at a point in time.
///
/// Field renames pin the exact CSV header the extension's worksheets
/// already bind to.
#[derive(Debug, Clone, Serialize)]
pub struct WardReading {
    #[serde(rename = "Timestamp", serialize_with = "serialize_timestamp")]
    pub timestamp: NaiveDateTime,
    #[serde(rename = "Ward_Name")]
    pub ward: String,
    #[serde(rename = "Occupancy_Percent")]
    pub occupancy: u32,
    #[serde(rename = "Wait_Time_Mins")]
    pub wait_time: u32,
    #[serde(rename = "Staff_On_Duty")]
    pub staff: u32,
    #[serde(rename = "Status")]
    pub status: WardStatus,
}

/// Second-precision timestamp format the worksheets expect.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn serialize_timestamp<S: Serializer>(
    timestamp: &NaiveDateTime,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&timestamp.format(TIMESTAMP_FORMAT))
}

/// Dataset generation errors
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("failed to write dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
