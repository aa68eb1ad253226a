//! Authorization policy as a single `(resource, action)` table

use crate::core::models::{PermissionLeaf, UserType};

use super::types::{PermissionAction, PermissionResource};

/// How one `(resource, action)` pair is decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Rule {
    /// Allowed for every authenticated user
    Open,
    /// Allowed when `leaf` is set in the effective permissions
    Leaf {
        leaf: PermissionLeaf,
        /// Completes "User does not have permission to ..."
        capability: &'static str,
        /// Denial names `account_admin` as the user type that would pass
        escalates: bool,
    },
    /// Allowed for everyone except `user_type`
    DeniedFor {
        user_type: UserType,
        reason: &'static str,
    },
}

const fn leaf(leaf: PermissionLeaf, capability: &'static str) -> Rule {
    Rule::Leaf {
        leaf,
        capability,
        escalates: false,
    }
}

const fn admin_leaf(leaf: PermissionLeaf, capability: &'static str) -> Rule {
    Rule::Leaf {
        leaf,
        capability,
        escalates: true,
    }
}

/// Rule for a known resource, `None` when the action is not valid for it
pub(super) fn lookup(resource: &PermissionResource, action: &PermissionAction) -> Option<Rule> {
    use PermissionAction as A;
    use PermissionLeaf as L;
    use PermissionResource as R;

    let rule = match (resource, action) {
        (R::Account, A::ManageSettings) => {
            admin_leaf(L::ManageWorkspaceSettings, "manage account settings")
        }
        (R::Account, A::ManageBilling) => admin_leaf(L::AccessBilling, "access billing"),
        (R::Account, A::ManageUsers) => admin_leaf(L::AccessUserManagement, "manage users"),

        (R::Workspace, A::Create) => leaf(L::CreateWorkspaces, "create workspaces"),
        (R::Workspace, A::Delete) => leaf(L::DeleteWorkspaces, "delete workspaces"),
        (R::Workspace, A::Update | A::ManageSettings) => {
            leaf(L::ManageWorkspaceSettings, "manage workspace settings")
        }
        (R::Workspace, A::Read) => Rule::Open,

        (R::Board, A::Create) => leaf(L::CreateMainBoards, "create boards"),
        (R::Board, A::Delete) => leaf(L::DeleteBoards, "delete boards"),
        (R::Board, A::Export) => leaf(L::ExportBoards, "export boards"),
        (R::Board, A::Read) => Rule::Open,
        (R::Board, A::Update) => Rule::DeniedFor {
            user_type: UserType::Viewer,
            reason: "Viewers cannot edit boards",
        },

        (R::Team, A::Create) => leaf(L::CreateTeams, "create teams"),
        (R::Team, A::Delete) => leaf(L::DeleteTeams, "delete teams"),
        (R::Team, A::ManageUsers) => leaf(L::ManageTeamMembers, "manage team members"),
        (R::Team, A::Read) => Rule::Open,

        (R::User, A::Create) => leaf(L::InviteUsers, "invite users"),
        (R::User, A::Delete) => leaf(L::RemoveUsers, "remove users"),
        (R::User, A::Update) => leaf(L::ChangeUserRoles, "change user roles"),
        (R::User, A::Read) => leaf(L::AccessUserManagement, "view users"),

        (R::App | R::Integration, A::Create) => leaf(L::InstallApps, "install apps"),
        (R::App | R::Integration, A::Delete) => leaf(L::UninstallApps, "uninstall apps"),
        (R::App | R::Integration, A::Update) => {
            leaf(L::ConfigureIntegrations, "configure integrations")
        }
        (R::App | R::Integration, A::Read) => Rule::Open,

        _ => return None,
    };

    Some(rule)
}
