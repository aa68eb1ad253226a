//! Core data models

pub mod permissions;
pub mod role;
pub mod user;

pub use permissions::{AccountPermissions, PermissionLeaf, PermissionOverrides, default_permissions};
pub use role::{CustomRole, CustomRoleDraft, CustomRoleUpdate};
pub use user::{PermissionedUser, UserType};
