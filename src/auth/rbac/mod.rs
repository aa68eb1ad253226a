//! Role-based permission evaluation
//!
//! Account-level user types carry fixed default permissions. A custom role
//! can revoke individual permissions but never grant one, and every
//! `(resource, action)` pair is decided by a single rule table.

mod helpers;
mod permissions;
mod roles;
mod rules;
mod store;
mod system;
mod types;

pub use store::{CustomRoleStore, InMemoryRoleStore};
pub use system::PermissionEvaluator;
pub use types::{
    PermissionAction, PermissionCheckResult, PermissionRequest, PermissionResource,
    RestrictionLevel,
};
