//! VitalFlow DevKit - local development tooling for the VitalFlow Tableau extension
//!
//! Provides the CORS-permissive asset server used while developing the
//! extension and the synthetic hospital-occupancy dataset generator used to
//! seed demo dashboards.

pub mod cli;
pub mod config;
pub mod dataset;
pub mod logging;
pub mod server;
