//! Generate command implementation

use crate::cli::GenerateArgs;
use crate::config::DevkitConfig;
use crate::dataset::{generate_history, write_snapshot};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Load configuration with CLI overrides
pub fn load_config_with_overrides(
    args: &GenerateArgs,
) -> Result<DevkitConfig, Box<dyn std::error::Error>> {
    let mut config = if args.config.exists() {
        DevkitConfig::load(Some(&args.config))?
    } else {
        DevkitConfig::default()
    };

    config = config.with_env_overrides();

    if let Some(ref output) = args.output {
        config.dataset.output = output.clone();
    }
    if let Some(hours) = args.hours {
        config.dataset.history_hours = hours;
    }

    Ok(config)
}

/// Main generate command handler
///
/// One-shot: synthesizes the ward history and overwrites the output CSV.
/// A missing parent directory is fatal, matching the original seeding
/// script's behavior.
pub fn run_generate(args: &GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_overrides(args)?;
    config.validate()?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let now = chrono::Local::now().naive_local();
    let rows = generate_history(&mut rng, now, config.dataset.history_hours);
    write_snapshot(&config.dataset.output, &rows)?;

    println!(
        "✓ Generated {} rows of ward history: {}",
        rows.len(),
        config.dataset.output.display()
    );

    Ok(())
}
