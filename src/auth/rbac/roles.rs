//! Custom role management methods

use crate::core::models::{CustomRole, CustomRoleDraft, CustomRoleUpdate};
use chrono::{DateTime, TimeDelta, Utc};
use tracing::info;
use uuid::Uuid;

use super::system::PermissionEvaluator;

impl PermissionEvaluator {
    /// Create and store a new custom role
    pub fn create_custom_role(&self, draft: CustomRoleDraft) -> CustomRole {
        let now = Utc::now();
        let role = CustomRole {
            id: format!("role-{}", Uuid::new_v4()),
            name: draft.name,
            description: draft.description,
            custom_permissions: draft.custom_permissions,
            is_active: draft.is_active,
            created_at: now,
            updated_at: now,
        };

        self.roles.insert(role.clone());
        info!(role_id = %role.id, name = %role.name, "Created custom role");
        role
    }

    /// Update an existing custom role, `None` if it does not exist
    pub fn update_custom_role(&self, role_id: &str, update: CustomRoleUpdate) -> Option<CustomRole> {
        let mut update = Some(update);
        let updated = self.roles.modify(role_id, &mut |role| {
            if let Some(update) = update.take() {
                update.apply_to(role);
            }
            role.updated_at = next_timestamp(role.updated_at);
        })?;

        info!(role_id = %updated.id, "Updated custom role");
        Some(updated)
    }

    /// Delete a custom role, returning whether it existed
    pub fn delete_custom_role(&self, role_id: &str) -> bool {
        let removed = self.roles.remove(role_id);
        if removed {
            info!(role_id = %role_id, "Deleted custom role");
        }
        removed
    }

    /// Get all custom roles, oldest first
    pub fn get_all_custom_roles(&self) -> Vec<CustomRole> {
        let mut roles = self.roles.list();
        roles.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        roles
    }

    /// Get a custom role by ID
    pub fn get_custom_role(&self, role_id: &str) -> Option<CustomRole> {
        self.roles.get(role_id)
    }

    /// Find a custom role by name
    pub fn find_custom_role(&self, name: &str) -> Option<CustomRole> {
        self.get_all_custom_roles()
            .into_iter()
            .find(|role| role.name == name)
    }
}

/// Current time, nudged forward so a role's `updated_at` always increases
fn next_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + TimeDelta::microseconds(1)
    }
}
