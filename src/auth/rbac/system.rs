//! Permission evaluator core

use crate::config::PermissionsConfig;
use std::sync::Arc;
use tracing::{info, warn};

use super::store::{CustomRoleStore, InMemoryRoleStore};

/// Decides whether a user may perform an action on a resource
///
/// Cloning is cheap and clones share the same custom role store.
#[derive(Debug, Clone)]
pub struct PermissionEvaluator {
    /// Custom role registry
    pub(super) roles: Arc<dyn CustomRoleStore>,
}

impl Default for PermissionEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl PermissionEvaluator {
    /// Evaluator with an empty in-memory role registry
    pub fn new() -> Self {
        Self::with_store(Arc::new(InMemoryRoleStore::new()))
    }

    /// Evaluator over an existing role store
    pub fn with_store(roles: Arc<dyn CustomRoleStore>) -> Self {
        Self { roles }
    }

    /// Evaluator seeded with the custom roles declared in configuration
    pub fn from_config(config: &PermissionsConfig) -> Self {
        info!("Initializing permission evaluator");

        let evaluator = Self::new();
        for draft in &config.custom_roles {
            if draft.custom_permissions.revoked().next().is_none() {
                warn!(role = %draft.name, "Custom role does not restrict any permission");
            }
            evaluator.create_custom_role(draft.clone());
        }

        info!(
            custom_roles = evaluator.roles.len(),
            "Permission evaluator initialized"
        );
        evaluator
    }

    /// Underlying custom role store
    pub fn store(&self) -> &Arc<dyn CustomRoleStore> {
        &self.roles
    }
}
