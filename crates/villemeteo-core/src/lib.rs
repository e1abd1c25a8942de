pub mod config;
pub mod error;
pub mod limit;

pub use config::{Config, GeoConfig, HttpConfig, MapConfig, SearchConfig, ValidationResult, WeatherConfig};
pub use error::{AppError, ConfigError, NetworkError, ReqwestErrorExt};
pub use limit::ResultLimit;

use anyhow::Result;

/// Initialize logging for the whole process.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;

    tracing::info!("Villemeteo core initialized");
    Ok(())
}
