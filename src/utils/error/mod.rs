//! Error handling for permission evaluation
//!
//! Denials are ordinary values; this module covers the ambient failures
//! around evaluation such as configuration and logging setup.

mod helpers;
mod types;

pub use types::{PermissionsError, Result};
