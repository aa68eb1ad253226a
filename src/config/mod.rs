//! Configuration management
//!
//! Account domains, custom roles to seed at startup and logging settings,
//! loaded from YAML and overridable from the environment.

pub mod loader;
pub mod models;
pub mod validation;

pub use loader::load_requests;
pub use models::*;
pub use validation::Validate;

use crate::utils::error::{PermissionsError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Permission settings
    pub permissions: PermissionsConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            PermissionsError::config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let permissions: PermissionsConfig = serde_yaml::from_str(&content)?;
        let config = Self { permissions };

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides read through `lookup`, then revalidate
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.permissions.apply_env_overrides(lookup)?;
        self.validate()?;
        Ok(self)
    }

    /// Get permission settings
    pub fn permissions(&self) -> &PermissionsConfig {
        &self.permissions
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.permissions
            .validate()
            .map_err(|e| PermissionsError::validation(format!("Permissions config error: {}", e)))?;

        self.permissions
            .logging
            .validate()
            .map_err(|e| PermissionsError::validation(format!("Logging config error: {}", e)))?;

        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.permissions)?)
    }
}
