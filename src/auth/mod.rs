//! Authorization
//!
//! Account-level permission evaluation lives in [`rbac`].

pub mod rbac;

pub use rbac::{PermissionCheckResult, PermissionEvaluator};
