//! Configuration validation

mod permissions_validators;
mod trait_def;

pub use trait_def::Validate;
