//! CLI module for the VitalFlow DevKit
//!
//! Command-line interface definitions and handlers.
//!
//! # Commands
//!
//! - `serve` - Start the local asset server for the extension
//! - `generate` - Write the synthetic hospital-occupancy demo CSV
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Serve the extension assets from the current directory
//! vitalflow serve
//!
//! # Seed the demo dataset with a reproducible run
//! vitalflow generate --seed 42
//!
//! # Generate shell completions
//! vitalflow completions bash > ~/.bash_completion.d/vitalflow
//! ```

pub mod completions;
pub mod config;
pub mod generate;
pub mod serve;

pub use completions::handle_completions;
pub use config::handle_config_init;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// VitalFlow DevKit - extension dev server and demo data generator
#[derive(Parser, Debug)]
#[command(
    name = "vitalflow",
    version,
    about = "Local development toolkit for the VitalFlow Tableau extension"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the local asset server
    Serve(ServeArgs),
    /// Generate the synthetic ward-occupancy demo dataset
    Generate(GenerateArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "vitalflow.toml")]
    pub config: PathBuf,

    /// Override server port
    #[arg(short, long, env = "VITALFLOW_PORT")]
    pub port: Option<u16>,

    /// Override server host
    #[arg(short = 'H', long, env = "VITALFLOW_HOST")]
    pub host: Option<String>,

    /// Override the directory assets are served from
    #[arg(short, long, env = "VITALFLOW_ROOT")]
    pub root: Option<PathBuf>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "VITALFLOW_LOG_LEVEL")]
    pub log_level: Option<String>,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "vitalflow.toml")]
    pub config: PathBuf,

    /// Override the output CSV path
    #[arg(short, long, env = "VITALFLOW_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Override hours of history to synthesize
    #[arg(long)]
    pub hours: Option<u32>,

    /// RNG seed for a reproducible dataset
    #[arg(short, long)]
    pub seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = "vitalflow.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
