//! # missions-permissions
//!
//! Account-level permission evaluation for a collaborative workspace
//! product.
//!
//! ## Features
//!
//! - **User types**: `account_admin`, `member`, `viewer` and `guest`, each
//!   with a fixed default permission tree
//! - **Custom roles**: restriction-only overlays that can revoke individual
//!   permissions but never grant one
//! - **Rule table**: every `(resource, action)` pair decided in one place,
//!   with unknown combinations denied
//! - **Bulk checks**: many requests answered in one call
//!
//! ## Quick Start
//!
//! ```rust
//! use missions_permissions::{
//!     CustomRoleDraft, PermissionAction, PermissionEvaluator, PermissionLeaf,
//!     PermissionOverrides, PermissionResource, PermissionedUser, UserType,
//! };
//!
//! let evaluator = PermissionEvaluator::new();
//!
//! let mut restrictions = PermissionOverrides::default();
//! restrictions.set(PermissionLeaf::CreateMainBoards, false);
//! let role = evaluator.create_custom_role(
//!     CustomRoleDraft::new("no-boards").permissions(restrictions),
//! );
//!
//! let member = PermissionedUser::new(UserType::Member).with_custom_role(role.id);
//! let result = evaluator.can_user(
//!     &member,
//!     &PermissionAction::Create,
//!     &PermissionResource::Board,
//!     None,
//! );
//! assert!(!result.allowed);
//! ```

#![warn(clippy::all)]

pub mod auth;
pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use auth::rbac::{
    CustomRoleStore, InMemoryRoleStore, PermissionAction, PermissionCheckResult,
    PermissionEvaluator, PermissionRequest, PermissionResource, RestrictionLevel,
};
pub use config::{Config, LoggingConfig, PermissionsConfig};
pub use core::models::{
    AccountPermissions, CustomRole, CustomRoleDraft, CustomRoleUpdate, PermissionLeaf,
    PermissionOverrides, PermissionedUser, UserType, default_permissions,
};
pub use utils::error::{PermissionsError, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
