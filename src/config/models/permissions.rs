//! Permission configuration

use super::default_log_level;
use crate::core::models::CustomRoleDraft;
use serde::{Deserialize, Serialize};

/// Permission settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionsConfig {
    /// Domains whose addresses belong to the account and cannot be guests
    #[serde(default)]
    pub account_domains: Vec<String>,
    /// Custom roles created when the evaluator starts
    #[serde(default)]
    pub custom_roles: Vec<CustomRoleDraft>,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter level; `RUST_LOG` takes precedence
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
