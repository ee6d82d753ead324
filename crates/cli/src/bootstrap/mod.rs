use ferrous_ns_domain::{CliOverrides, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub fn load_config(path: Option<&str>, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, cli_overrides).map_err(|e| {
        error!("Failed to load configuration: {}", e);
        anyhow::anyhow!(e)
    })?;

    config.validate()?;
    Ok(config)
}

/// `RUST_LOG` takes precedence over the configured level.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(&config.logging.level).unwrap_or_else(|_| EnvFilter::new("info"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!(level = %config.logging.level, "Logging initialized");
}
