//! Permission evaluation types

use crate::core::models::UserType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Action a user wants to perform
///
/// Strings that do not name a known action are kept verbatim in `Other` so
/// they can be denied with a diagnostic instead of failing to parse. Values
/// compare by name, so `Other("read")` equals `Read`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PermissionAction {
    Create,
    Read,
    Update,
    Delete,
    Share,
    Export,
    ManageUsers,
    ManageSettings,
    ManageBilling,
    Other(String),
}

impl PermissionAction {
    pub fn as_str(&self) -> &str {
        match self {
            PermissionAction::Create => "create",
            PermissionAction::Read => "read",
            PermissionAction::Update => "update",
            PermissionAction::Delete => "delete",
            PermissionAction::Share => "share",
            PermissionAction::Export => "export",
            PermissionAction::ManageUsers => "manage_users",
            PermissionAction::ManageSettings => "manage_settings",
            PermissionAction::ManageBilling => "manage_billing",
            PermissionAction::Other(action) => action,
        }
    }

    /// Same action with an `Other` payload that names a known action resolved
    pub fn normalized(&self) -> Self {
        match self {
            PermissionAction::Other(action) => Self::from(action.as_str()),
            known => known.clone(),
        }
    }
}

impl PartialEq for PermissionAction {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for PermissionAction {}

impl Hash for PermissionAction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl From<&str> for PermissionAction {
    fn from(s: &str) -> Self {
        match s {
            "create" => PermissionAction::Create,
            "read" => PermissionAction::Read,
            "update" => PermissionAction::Update,
            "delete" => PermissionAction::Delete,
            "share" => PermissionAction::Share,
            "export" => PermissionAction::Export,
            "manage_users" => PermissionAction::ManageUsers,
            "manage_settings" => PermissionAction::ManageSettings,
            "manage_billing" => PermissionAction::ManageBilling,
            other => PermissionAction::Other(other.to_string()),
        }
    }
}

impl From<String> for PermissionAction {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<PermissionAction> for String {
    fn from(action: PermissionAction) -> Self {
        action.as_str().to_string()
    }
}

impl fmt::Display for PermissionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resource an action targets
///
/// Like [`PermissionAction`], unrecognised names land in `Other` and values
/// compare by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PermissionResource {
    Account,
    Workspace,
    Board,
    Team,
    User,
    App,
    Integration,
    Other(String),
}

impl PermissionResource {
    pub fn as_str(&self) -> &str {
        match self {
            PermissionResource::Account => "account",
            PermissionResource::Workspace => "workspace",
            PermissionResource::Board => "board",
            PermissionResource::Team => "team",
            PermissionResource::User => "user",
            PermissionResource::App => "app",
            PermissionResource::Integration => "integration",
            PermissionResource::Other(resource) => resource,
        }
    }

    /// Same resource with an `Other` payload that names a known resource resolved
    pub fn normalized(&self) -> Self {
        match self {
            PermissionResource::Other(resource) => Self::from(resource.as_str()),
            known => known.clone(),
        }
    }

    /// Whether a rule table exists for this resource
    pub fn is_known(&self) -> bool {
        !matches!(self.normalized(), PermissionResource::Other(_))
    }
}

impl PartialEq for PermissionResource {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for PermissionResource {}

impl Hash for PermissionResource {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl From<&str> for PermissionResource {
    fn from(s: &str) -> Self {
        match s {
            "account" => PermissionResource::Account,
            "workspace" => PermissionResource::Workspace,
            "board" => PermissionResource::Board,
            "team" => PermissionResource::Team,
            "user" => PermissionResource::User,
            "app" => PermissionResource::App,
            "integration" => PermissionResource::Integration,
            other => PermissionResource::Other(other.to_string()),
        }
    }
}

impl From<String> for PermissionResource {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<PermissionResource> for String {
    fn from(resource: PermissionResource) -> Self {
        resource.as_str().to_string()
    }
}

impl fmt::Display for PermissionResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scope that imposed a denial, outermost first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestrictionLevel {
    Account,
    Workspace,
    Board,
}

/// Outcome of a permission check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionCheckResult {
    /// Whether the action is allowed
    pub allowed: bool,
    /// Reason for denial
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Scope that denied access
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restricted_by: Option<RestrictionLevel>,
    /// User type that would be allowed, when escalation resolves the denial
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_user_type: Option<UserType>,
}

impl PermissionCheckResult {
    pub fn allow() -> Self {
        Self {
            allowed: true,
            reason: None,
            restricted_by: None,
            required_user_type: None,
        }
    }

    pub fn deny(reason: impl Into<String>) -> Self {
        Self {
            allowed: false,
            reason: Some(reason.into()),
            restricted_by: None,
            required_user_type: None,
        }
    }

    pub(super) fn restricted_by(mut self, level: RestrictionLevel) -> Self {
        self.restricted_by = Some(level);
        self
    }

    pub(super) fn requiring(mut self, user_type: UserType) -> Self {
        self.required_user_type = Some(user_type);
        self
    }

    /// Compose results evaluated at several scopes.
    ///
    /// Any denial wins over every allow. Among denials the outermost scope
    /// is reported, and a denial with no scope counts as the account's.
    /// An empty input is allowed.
    pub fn strictest<I>(results: I) -> Self
    where
        I: IntoIterator<Item = PermissionCheckResult>,
    {
        results
            .into_iter()
            .filter(|result| !result.allowed)
            .min_by_key(|result| result.restricted_by.unwrap_or(RestrictionLevel::Account))
            .unwrap_or_else(Self::allow)
    }
}

/// One entry of a bulk permission check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionRequest {
    pub action: PermissionAction,
    pub resource: PermissionResource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
}

impl PermissionRequest {
    pub fn new(action: impl Into<PermissionAction>, resource: impl Into<PermissionResource>) -> Self {
        Self {
            action: action.into(),
            resource: resource.into(),
            resource_id: None,
        }
    }

    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }

    /// `action:resource` or `action:resource:id`; an empty id is dropped
    pub fn key(&self) -> String {
        match self.resource_id.as_deref() {
            Some(id) if !id.is_empty() => format!("{}:{}:{}", self.action, self.resource, id),
            _ => format!("{}:{}", self.action, self.resource),
        }
    }
}
