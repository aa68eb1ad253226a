//! Permission configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use std::collections::HashSet;
use tracing::debug;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl Validate for PermissionsConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating permissions configuration");

        let mut domains = HashSet::new();
        for domain in &self.account_domains {
            if domain.trim().is_empty() {
                return Err("Account domain cannot be empty".to_string());
            }
            if domain.contains('@') {
                return Err(format!("Account domain must not contain '@': {}", domain));
            }
            if !domains.insert(domain.to_ascii_lowercase()) {
                return Err(format!("Duplicate account domain: {}", domain));
            }
        }

        let mut names = HashSet::new();
        for role in &self.custom_roles {
            if role.name.trim().is_empty() {
                return Err("Custom role name cannot be empty".to_string());
            }
            if !names.insert(role.name.as_str()) {
                return Err(format!("Duplicate custom role name: {}", role.name));
            }
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if !LOG_LEVELS.contains(&self.level.as_str()) {
            return Err(format!(
                "Log level must be one of {}, got {}",
                LOG_LEVELS.join(", "),
                self.level
            ));
        }

        Ok(())
    }
}
