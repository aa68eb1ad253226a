//! Account permission tree
//!
//! `AccountPermissions` is the complete set of account-level capabilities a
//! user can hold. `PermissionOverrides` is its partial counterpart used by
//! custom roles, and `PermissionLeaf` names every single boolean in the tree
//! so the two can be walked generically.

use super::user::UserType;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares the permission categories, both tree shapes and the leaf enum
/// from one table so they can never drift apart.
macro_rules! permission_tree {
    ($(
        $(#[$cat_meta:meta])*
        $category:ident: $Category:ident / $Overrides:ident = $cat_name:literal {
            $( $field:ident = $field_name:literal => $Leaf:ident, )+
        }
    )+) => {
        $(
            $(#[$cat_meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
            pub struct $Category {
                $(
                    #[serde(rename = $field_name, default)]
                    pub $field: bool,
                )+
            }

            #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
            pub struct $Overrides {
                $(
                    #[serde(rename = $field_name, default, skip_serializing_if = "Option::is_none")]
                    pub $field: Option<bool>,
                )+
            }
        )+

        /// Account-level permissions, one boolean per capability
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
        pub struct AccountPermissions {
            $(
                #[serde(rename = $cat_name, default)]
                pub $category: $Category,
            )+
        }

        /// Partial permission tree carried by a custom role
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
        pub struct PermissionOverrides {
            $(
                #[serde(rename = $cat_name, default, skip_serializing_if = "Option::is_none")]
                pub $category: Option<$Overrides>,
            )+
        }

        /// A single boolean capability inside [`AccountPermissions`]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum PermissionLeaf {
            $( $( $Leaf, )+ )+
        }

        impl PermissionLeaf {
            /// Every leaf, in tree order
            pub const ALL: &'static [PermissionLeaf] = &[
                $( $( PermissionLeaf::$Leaf, )+ )+
            ];

            /// Category the leaf lives in, e.g. `boardManagement`
            pub fn category(self) -> &'static str {
                match self {
                    $( $( PermissionLeaf::$Leaf => $cat_name, )+ )+
                }
            }

            /// Leaf name within its category, e.g. `createMainBoards`
            pub fn name(self) -> &'static str {
                match self {
                    $( $( PermissionLeaf::$Leaf => $field_name, )+ )+
                }
            }
        }

        impl AccountPermissions {
            pub fn get(&self, leaf: PermissionLeaf) -> bool {
                match leaf {
                    $( $( PermissionLeaf::$Leaf => self.$category.$field, )+ )+
                }
            }

            pub fn set(&mut self, leaf: PermissionLeaf, value: bool) {
                match leaf {
                    $( $( PermissionLeaf::$Leaf => self.$category.$field = value, )+ )+
                }
            }
        }

        impl PermissionOverrides {
            /// Explicit value for a leaf, `None` when the role does not mention it
            pub fn get(&self, leaf: PermissionLeaf) -> Option<bool> {
                match leaf {
                    $( $( PermissionLeaf::$Leaf => self.$category.and_then(|c| c.$field), )+ )+
                }
            }

            pub fn set(&mut self, leaf: PermissionLeaf, value: bool) {
                match leaf {
                    $( $(
                        PermissionLeaf::$Leaf => {
                            self.$category.get_or_insert_with(Default::default).$field = Some(value)
                        }
                    )+ )+
                }
            }
        }
    };
}

permission_tree! {
    /// User management, security and billing
    admin_privileges: AdminPrivileges / AdminPrivilegesOverrides = "adminPrivileges" {
        access_user_management = "accessUserManagement" => AccessUserManagement,
        invite_users = "inviteUsers" => InviteUsers,
        remove_users = "removeUsers" => RemoveUsers,
        change_user_roles = "changeUserRoles" => ChangeUserRoles,
        manage_board_ownership = "manageBoardOwnership" => ManageBoardOwnership,
        manage_automation_ownership = "manageAutomationOwnership" => ManageAutomationOwnership,
        access_security = "accessSecurity" => AccessSecurity,
        configure_sso = "configureSSO" => ConfigureSso,
        view_audit_logs = "viewAuditLogs" => ViewAuditLogs,
        manage_compliance = "manageCompliance" => ManageCompliance,
        manage_session_settings = "manageSessionSettings" => ManageSessionSettings,
        activate_panic_mode = "activatePanicMode" => ActivatePanicMode,
        access_billing = "accessBilling" => AccessBilling,
        change_plan = "changePlan" => ChangePlan,
        manage_invoices = "manageInvoices" => ManageInvoices,
        update_payment_method = "updatePaymentMethod" => UpdatePaymentMethod,
        manage_billing_contacts = "manageBillingContacts" => ManageBillingContacts,
    }
    workspace_management: WorkspaceManagement / WorkspaceManagementOverrides = "workspaceManagement" {
        create_workspaces = "createWorkspaces" => CreateWorkspaces,
        delete_workspaces = "deleteWorkspaces" => DeleteWorkspaces,
        manage_workspace_settings = "manageWorkspaceSettings" => ManageWorkspaceSettings,
        transfer_workspace_ownership = "transferWorkspaceOwnership" => TransferWorkspaceOwnership,
    }
    board_management: BoardManagement / BoardManagementOverrides = "boardManagement" {
        create_main_boards = "createMainBoards" => CreateMainBoards,
        create_private_boards = "createPrivateBoards" => CreatePrivateBoards,
        create_shareable_boards = "createShareableBoards" => CreateShareableBoards,
        delete_boards = "deleteBoards" => DeleteBoards,
        archive_boards = "archiveBoards" => ArchiveBoards,
        duplicate_boards = "duplicateBoards" => DuplicateBoards,
        export_boards = "exportBoards" => ExportBoards,
    }
    team_management: TeamManagement / TeamManagementOverrides = "teamManagement" {
        create_teams = "createTeams" => CreateTeams,
        delete_teams = "deleteTeams" => DeleteTeams,
        manage_team_members = "manageTeamMembers" => ManageTeamMembers,
        create_sub_teams = "createSubTeams" => CreateSubTeams,
    }
    integrations_and_apps: IntegrationsAndApps / IntegrationsAndAppsOverrides = "integrationsAndApps" {
        install_apps = "installApps" => InstallApps,
        uninstall_apps = "uninstallApps" => UninstallApps,
        configure_integrations = "configureIntegrations" => ConfigureIntegrations,
        manage_api_access = "manageAPIAccess" => ManageApiAccess,
    }
    content_creation: ContentCreation / ContentCreationOverrides = "contentCreation" {
        create_docs = "createDocs" => CreateDocs,
        create_dashboards = "createDashboards" => CreateDashboards,
        create_forms = "createForms" => CreateForms,
        create_automations = "createAutomations" => CreateAutomations,
    }
}

impl fmt::Display for PermissionLeaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.category(), self.name())
    }
}

impl AccountPermissions {
    /// Tree with every leaf set to `value`
    pub fn uniform(value: bool) -> Self {
        let mut permissions = Self::default();
        for &leaf in PermissionLeaf::ALL {
            permissions.set(leaf, value);
        }
        permissions
    }

    /// Leaves currently granted, in tree order
    pub fn granted(&self) -> impl Iterator<Item = PermissionLeaf> + '_ {
        PermissionLeaf::ALL
            .iter()
            .copied()
            .filter(move |leaf| self.get(*leaf))
    }

    fn with(mut self, leaves: &[PermissionLeaf], value: bool) -> Self {
        for &leaf in leaves {
            self.set(leaf, value);
        }
        self
    }
}

impl PermissionOverrides {
    /// Leaves explicitly revoked by these overrides
    pub fn revoked(&self) -> impl Iterator<Item = PermissionLeaf> + '_ {
        PermissionLeaf::ALL
            .iter()
            .copied()
            .filter(move |leaf| self.get(*leaf) == Some(false))
    }

    /// Force every leaf these overrides set to `false` off in `base`.
    ///
    /// Leaves that are absent or `true` leave `base` untouched, so the
    /// result is never more permissive than `base`.
    pub fn restrict(&self, base: &mut AccountPermissions) {
        for leaf in self.revoked() {
            base.set(leaf, false);
        }
    }
}

const MEMBER_GRANTS: &[PermissionLeaf] = &[
    PermissionLeaf::InviteUsers,
    PermissionLeaf::CreateWorkspaces,
    PermissionLeaf::CreateMainBoards,
    PermissionLeaf::CreatePrivateBoards,
    PermissionLeaf::CreateShareableBoards,
    PermissionLeaf::ArchiveBoards,
    PermissionLeaf::DuplicateBoards,
    PermissionLeaf::ExportBoards,
    PermissionLeaf::CreateTeams,
    PermissionLeaf::InstallApps,
    PermissionLeaf::UninstallApps,
    PermissionLeaf::ConfigureIntegrations,
    PermissionLeaf::CreateDocs,
    PermissionLeaf::CreateDashboards,
    PermissionLeaf::CreateForms,
    PermissionLeaf::CreateAutomations,
];

const VIEWER_GRANTS: &[PermissionLeaf] = &[PermissionLeaf::ExportBoards];

static DEFAULT_PERMISSIONS: Lazy<[AccountPermissions; 4]> = Lazy::new(|| {
    [
        AccountPermissions::uniform(true),
        AccountPermissions::uniform(false).with(MEMBER_GRANTS, true),
        AccountPermissions::uniform(false).with(VIEWER_GRANTS, true),
        AccountPermissions::uniform(false),
    ]
});

/// Baseline permissions for a user type, before any custom role
pub fn default_permissions(user_type: UserType) -> &'static AccountPermissions {
    let index = match user_type {
        UserType::AccountAdmin => 0,
        UserType::Member => 1,
        UserType::Viewer => 2,
        UserType::Guest => 3,
    };
    &DEFAULT_PERMISSIONS[index]
}
