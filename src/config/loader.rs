//! Configuration loading utilities
//!
//! Environment overrides and permission request files.

use super::models::PermissionsConfig;
use crate::auth::rbac::PermissionRequest;
use crate::utils::error::{PermissionsError, Result};
use std::path::Path;
use tracing::debug;

/// Comma-separated account domains
pub const ENV_ACCOUNT_DOMAINS: &str = "PERMISSIONS_ACCOUNT_DOMAINS";
/// Default log level
pub const ENV_LOG_LEVEL: &str = "PERMISSIONS_LOG_LEVEL";
/// `true` or `false`
pub const ENV_LOG_JSON: &str = "PERMISSIONS_LOG_JSON";

impl PermissionsConfig {
    /// Override settings from variables resolved through `lookup`
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!("Applying environment overrides");

        if let Some(domains) = lookup(ENV_ACCOUNT_DOMAINS) {
            self.account_domains = domains
                .split(',')
                .map(str::trim)
                .filter(|domain| !domain.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level.trim().to_lowercase();
        }
        if let Some(json) = lookup(ENV_LOG_JSON) {
            self.logging.json = json.trim().parse().map_err(|e| {
                PermissionsError::config(format!("Invalid {} value {:?}: {}", ENV_LOG_JSON, json, e))
            })?;
        }

        Ok(())
    }
}

/// Read a list of permission requests from a JSON or YAML file
///
/// Files ending in `.json` are parsed as JSON, anything else as YAML.
pub async fn load_requests<P: AsRef<Path>>(path: P) -> Result<Vec<PermissionRequest>> {
    let path = path.as_ref();
    debug!("Loading permission requests from: {:?}", path);

    let content = tokio::fs::read_to_string(path).await?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let requests = if is_json {
        serde_json::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };
    Ok(requests)
}
