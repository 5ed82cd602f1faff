//! Application configuration module
//!
//! Environment-driven settings plus the response messages and limits
//! shared across handlers.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
