//! Custom role models

use super::permissions::PermissionOverrides;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Restriction-only custom role layered over a user's base type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomRole {
    /// Role ID
    pub id: String,
    /// Role name
    pub name: String,
    /// Role description
    #[serde(default)]
    pub description: String,
    /// Leaves this role restricts; only `false` values have an effect
    #[serde(default)]
    pub custom_permissions: PermissionOverrides,
    /// Inactive roles are ignored during evaluation
    pub is_active: bool,
    /// Created at
    pub created_at: DateTime<Utc>,
    /// Updated at
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a custom role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomRoleDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "customPermissions")]
    pub custom_permissions: PermissionOverrides,
    #[serde(default = "default_active", alias = "isActive")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl CustomRoleDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            custom_permissions: PermissionOverrides::default(),
            is_active: true,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn permissions(mut self, custom_permissions: PermissionOverrides) -> Self {
        self.custom_permissions = custom_permissions;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

/// Partial update applied over an existing role; `None` keeps the stored value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomRoleUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub custom_permissions: Option<PermissionOverrides>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl CustomRoleUpdate {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn permissions(mut self, custom_permissions: PermissionOverrides) -> Self {
        self.custom_permissions = Some(custom_permissions);
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    /// Shallow merge onto `role`. Timestamps are left to the caller.
    pub fn apply_to(self, role: &mut CustomRole) {
        if let Some(name) = self.name {
            role.name = name;
        }
        if let Some(description) = self.description {
            role.description = description;
        }
        if let Some(custom_permissions) = self.custom_permissions {
            role.custom_permissions = custom_permissions;
        }
        if let Some(is_active) = self.is_active {
            role.is_active = is_active;
        }
    }
}
