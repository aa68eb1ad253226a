//! Permission checking methods

use crate::core::models::{AccountPermissions, PermissionedUser, UserType, default_permissions};
use std::collections::HashMap;
use tracing::debug;

use super::rules::{self, Rule};
use super::system::PermissionEvaluator;
use super::types::{
    PermissionAction, PermissionCheckResult, PermissionRequest, PermissionResource,
    RestrictionLevel,
};

impl PermissionEvaluator {
    /// Check if a user can perform an action on a resource
    ///
    /// Account admins are allowed everything. For anyone else the action is
    /// looked up in the rule table and decided against the user's effective
    /// permissions; unknown resources and actions are denied. The resource
    /// ID is accepted for resource-scoped callers but not looked up.
    pub fn can_user(
        &self,
        user: &PermissionedUser,
        action: &PermissionAction,
        resource: &PermissionResource,
        _resource_id: Option<&str>,
    ) -> PermissionCheckResult {
        if user.is_account_admin() {
            return PermissionCheckResult::allow();
        }

        let permissions = self.get_effective_account_permissions(user);
        let result = evaluate(user, &permissions, action, resource);

        if !result.allowed {
            debug!(
                user_type = %user.user_type,
                action = %action,
                resource = %resource,
                reason = result.reason.as_deref().unwrap_or_default(),
                "Permission denied"
            );
        }
        result
    }

    /// Check several permissions at once
    ///
    /// Keys are `action:resource`, or `action:resource:id` when an ID is
    /// given. Every entry is evaluated on its own.
    pub fn can_user_multiple(
        &self,
        user: &PermissionedUser,
        checks: &[PermissionRequest],
    ) -> HashMap<String, bool> {
        checks
            .iter()
            .map(|check| {
                let result = self.can_user(
                    user,
                    &check.action,
                    &check.resource,
                    check.resource_id.as_deref(),
                );
                (check.key(), result.allowed)
            })
            .collect()
    }

    /// Base permissions of the user's type with any active custom role applied
    pub fn get_effective_account_permissions(&self, user: &PermissionedUser) -> AccountPermissions {
        let mut permissions = *default_permissions(user.user_type);

        if let Some(role) = user
            .custom_role
            .as_deref()
            .and_then(|id| self.roles.get(id))
            .filter(|role| role.is_active)
        {
            role.custom_permissions.restrict(&mut permissions);
        }

        permissions
    }
}

/// Decide a non-admin request against the rule table
fn evaluate(
    user: &PermissionedUser,
    permissions: &AccountPermissions,
    action: &PermissionAction,
    resource: &PermissionResource,
) -> PermissionCheckResult {
    let action = action.normalized();
    let resource = resource.normalized();

    if !resource.is_known() {
        return PermissionCheckResult::deny(format!("Unknown resource type: {}", resource));
    }

    let Some(rule) = rules::lookup(&resource, &action) else {
        return PermissionCheckResult::deny(format!("Invalid action for {} resource", resource));
    };

    match rule {
        Rule::Open => PermissionCheckResult::allow(),
        Rule::DeniedFor { user_type, reason } if user.user_type == user_type => {
            PermissionCheckResult::deny(reason).restricted_by(RestrictionLevel::Account)
        }
        Rule::DeniedFor { .. } => PermissionCheckResult::allow(),
        Rule::Leaf {
            leaf,
            capability,
            escalates,
        } => {
            // Workspace deletion also needs ownership, which the caller
            // verifies; only the account-level leaf is decided here.
            if permissions.get(leaf) {
                return PermissionCheckResult::allow();
            }
            let denial = PermissionCheckResult::deny(format!(
                "User does not have permission to {}",
                capability
            ))
            .restricted_by(RestrictionLevel::Account);
            if escalates {
                denial.requiring(UserType::AccountAdmin)
            } else {
                denial
            }
        }
    }
}
