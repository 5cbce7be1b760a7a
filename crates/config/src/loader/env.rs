//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `ELASTICSEARCH_ARCHIVE_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Building the final Config (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric or boolean values return ConfigError::InvalidValue.

use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{ENV_EXPRESSION, ENV_REPOSITORY, ENV_SKIP_VERIFY, ENV_TIMEOUT, ENV_URI};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(expression) = env_var_or_none(ENV_EXPRESSION) {
        loader.set_expression(Some(expression));
    }
    if let Some(repository) = env_var_or_none(ENV_REPOSITORY) {
        loader.set_repository(Some(repository));
    }
    if let Some(uri) = env_var_or_none(ENV_URI) {
        loader.set_uri(Some(uri));
    }
    if let Some(timeout) = env_var_or_none(ENV_TIMEOUT) {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_TIMEOUT.to_string(),
            message: "must be a number of seconds".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(skip) = env_var_or_none(ENV_SKIP_VERIFY) {
        loader.set_skip_verify(Some(skip.parse().map_err(|_| {
            ConfigError::InvalidValue {
                var: ENV_SKIP_VERIFY.to_string(),
                message: "must be true or false".to_string(),
            }
        })?));
    }
    Ok(())
}
