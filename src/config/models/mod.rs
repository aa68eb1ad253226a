//! Configuration data models

pub mod permissions;

pub use permissions::*;

/// Default log level
pub fn default_log_level() -> String {
    "info".to_string()
}
