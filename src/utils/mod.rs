//! Utility modules
//!
//! - **error**: Error types shared across the crate
//! - **logging**: Tracing subscriber setup

pub mod error;
pub mod logging;
