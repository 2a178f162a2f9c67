//! Serve command implementation

use crate::cli::ServeArgs;
use crate::config::{DevkitConfig, LogFormat};
use crate::server::{create_router, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Load configuration with CLI overrides
pub fn load_config_with_overrides(
    args: &ServeArgs,
) -> Result<DevkitConfig, Box<dyn std::error::Error>> {
    // Load from file if it exists, otherwise use defaults
    let mut config = if args.config.exists() {
        DevkitConfig::load(Some(&args.config))?
    } else {
        tracing::debug!("Config file not found, using defaults");
        DevkitConfig::default()
    };

    // Apply environment variable overrides
    config = config.with_env_overrides();

    // Apply CLI overrides (highest priority)
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    if let Some(ref root) = args.root {
        config.server.root = root.clone();
    }
    if let Some(ref log_level) = args.log_level {
        config.logging.level = log_level.clone();
    }

    Ok(config)
}

/// Initialize tracing based on configuration
pub fn init_tracing(
    config: &crate::config::LoggingConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter_str = crate::logging::build_filter_directives(config);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    match config.format {
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .try_init()?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .try_init()?;
        }
    }

    Ok(())
}

/// Wait for shutdown signal (SIGINT or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}

/// Main serve command handler
pub async fn run_serve(args: ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load and merge configuration
    let config = load_config_with_overrides(&args)?;
    config.validate()?;

    // 2. Initialize tracing
    init_tracing(&config.logging)?;

    // 3. Resolve the serving root so miss diagnostics show absolute paths
    let root = std::fs::canonicalize(&config.server.root)?;
    let state = Arc::new(AppState::new(root.clone()));
    let app = create_router(state);

    // 4. Bind and serve
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(root = %root.display(), "Serving extension assets");
    tracing::info!(addr = %addr, "Asset server listening");
    tracing::info!(
        "Extension URL: http://localhost:{}/index.html",
        config.server.port
    );
    tracing::info!(
        "Manifest URL: http://localhost:{}/vitalflow.trex",
        config.server.port
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Asset server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    #[test]
    fn test_serve_config_loading() {
        let temp = NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), "[server]\nport = 8080").unwrap();

        let args = ServeArgs {
            config: temp.path().to_path_buf(),
            port: None,
            host: None,
            root: None,
            log_level: None,
        };

        let config = load_config_with_overrides(&args).unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_serve_cli_overrides_config() {
        let temp = NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), "[server]\nport = 8080").unwrap();

        let args = ServeArgs {
            config: temp.path().to_path_buf(),
            port: Some(9000), // Override
            host: None,
            root: None,
            log_level: None,
        };

        let config = load_config_with_overrides(&args).unwrap();
        assert_eq!(config.server.port, 9000); // CLI wins
    }

    #[test]
    fn test_serve_root_override() {
        let args = ServeArgs {
            config: PathBuf::from("nonexistent.toml"),
            port: None,
            host: None,
            root: Some(PathBuf::from("/srv/extension")),
            log_level: None,
        };

        let config = load_config_with_overrides(&args).unwrap();
        assert_eq!(config.server.root, PathBuf::from("/srv/extension"));
    }

    #[test]
    fn test_serve_works_without_config_file() {
        let args = ServeArgs {
            config: PathBuf::from("nonexistent.toml"),
            port: None,
            host: None,
            root: None,
            log_level: None,
        };

        let config = load_config_with_overrides(&args).unwrap();
        assert_eq!(config.server.port, 8765); // Default
    }
}
