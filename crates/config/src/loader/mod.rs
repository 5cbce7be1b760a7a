//! Configuration loader for `.env` files and environment variables.
//!
//! Responsibilities:
//! - Load configuration from `.env` files, environment variables, and explicit overrides.
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Command-line parsing (see the CLI crate).
//! - Talking to the cluster (see the client crate).
//!
//! Invariants / Assumptions:
//! - Builder overrides take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

mod builder;
mod defaults;
mod env;
mod error;

pub use builder::ConfigLoader;
pub use defaults::default_expression;
pub use env::env_var_or_none;
pub use error::{ConfigError, RequiredSetting};

#[cfg(test)]
mod tests;
