//! Configuration for elasticsearch-archive.
//!
//! This crate merges settings from `.env` files, environment variables and
//! explicit overrides (CLI flags) into a validated [`Config`].

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, RequiredSetting, default_expression, env_var_or_none};
pub use types::Config;
