//! User type and capability helpers

use crate::core::models::{PermissionLeaf, PermissionedUser, UserType};
use std::cmp::Ordering;

use super::system::PermissionEvaluator;

/// Capabilities listed in user-facing descriptions, in display order
const DESCRIBED_CAPABILITIES: &[(PermissionLeaf, &str)] = &[
    (PermissionLeaf::CreateWorkspaces, "Create workspaces"),
    (PermissionLeaf::CreateMainBoards, "Create boards"),
    (PermissionLeaf::CreateTeams, "Create teams"),
    (PermissionLeaf::InviteUsers, "Invite users"),
    (PermissionLeaf::InstallApps, "Install apps"),
];

impl PermissionEvaluator {
    /// Check if `assigning_user` may give someone the `target` user type.
    ///
    /// Assigning user types is reserved to account admins.
    pub fn can_assign_user_type(
        &self,
        assigning_user: &PermissionedUser,
        _target: UserType,
    ) -> bool {
        assigning_user.is_account_admin()
    }

    /// Whether an address may be invited as a guest, i.e. its domain is not
    /// one of the account's own domains. Domains match exactly.
    pub fn can_be_guest<S: AsRef<str>>(&self, user_email: &str, account_domains: &[S]) -> bool {
        let Some(domain) = user_email.split('@').nth(1) else {
            return true;
        };

        !account_domains
            .iter()
            .any(|account_domain| account_domain.as_ref() == domain)
    }

    /// Human-readable summary of what a user can do, for display only
    pub fn get_user_capabilities_description(&self, user: &PermissionedUser) -> Vec<String> {
        let permissions = self.get_effective_account_permissions(user);

        let mut capabilities: Vec<String> = DESCRIBED_CAPABILITIES
            .iter()
            .filter(|(leaf, _)| permissions.get(*leaf))
            .map(|(_, label)| label.to_string())
            .collect();

        match user.user_type {
            UserType::Viewer => capabilities.push("View-only access".to_string()),
            UserType::Guest => {
                capabilities.push("Guest access (limited to shareable boards)".to_string())
            }
            UserType::AccountAdmin | UserType::Member => {}
        }

        capabilities
    }

    /// `1` if `a` outranks `b`, `-1` if `b` outranks `a`, `0` if equal
    pub fn compare_user_types(&self, a: UserType, b: UserType) -> i8 {
        match a.cmp(&b) {
            Ordering::Greater => 1,
            Ordering::Less => -1,
            Ordering::Equal => 0,
        }
    }
}
