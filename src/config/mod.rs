//! Application configuration module
//!
//! Environment-driven settings plus the constants shared by
//! authentication, request validation and the database schema.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
