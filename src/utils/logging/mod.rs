//! Logging setup

use crate::config::LoggingConfig;
use crate::utils::error::{PermissionsError, Result};
use tracing_subscriber::EnvFilter;

/// Build the event filter; `RUST_LOG` wins over the configured level
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            PermissionsError::config(format!("Invalid log level {}: {}", config.level, e))
        }),
    }
}

/// Install the global tracing subscriber
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config)?)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| PermissionsError::internal(format!("Failed to initialize logging: {}", e)))
}
