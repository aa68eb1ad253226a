//! User types and the permission-bearing view of a user

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Account-level user type, ordered by privilege
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    /// Full account access
    AccountAdmin,
    /// Standard member, can create and edit
    Member,
    /// Read-only access
    Viewer,
    /// External user limited to shared boards
    Guest,
}

impl UserType {
    /// Every user type, most privileged first
    pub const HIERARCHY: [UserType; 4] = [
        UserType::AccountAdmin,
        UserType::Member,
        UserType::Viewer,
        UserType::Guest,
    ];

    /// Position in [`Self::HIERARCHY`]; lower is more privileged
    fn rank(self) -> usize {
        match self {
            UserType::AccountAdmin => 0,
            UserType::Member => 1,
            UserType::Viewer => 2,
            UserType::Guest => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UserType::AccountAdmin => "account_admin",
            UserType::Member => "member",
            UserType::Viewer => "viewer",
            UserType::Guest => "guest",
        }
    }
}

impl Ord for UserType {
    fn cmp(&self, other: &Self) -> Ordering {
        other.rank().cmp(&self.rank())
    }
}

impl PartialOrd for UserType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "account_admin" => Ok(UserType::AccountAdmin),
            "member" => Ok(UserType::Member),
            "viewer" => Ok(UserType::Viewer),
            "guest" => Ok(UserType::Guest),
            _ => Err(format!("Invalid user type: {}", s)),
        }
    }
}

/// The facts about a user that permission evaluation depends on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionedUser {
    /// Base user type
    pub user_type: UserType,
    /// Custom role ID, if one is assigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_role: Option<String>,
}

impl PermissionedUser {
    pub fn new(user_type: UserType) -> Self {
        Self {
            user_type,
            custom_role: None,
        }
    }

    pub fn with_custom_role(mut self, role_id: impl Into<String>) -> Self {
        self.custom_role = Some(role_id.into());
        self
    }

    pub fn is_account_admin(&self) -> bool {
        self.user_type == UserType::AccountAdmin
    }
}
