//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading failures.
//! - Name the required settings so callers can print flag/env guidance.
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, positions).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::fmt;
use std::io::ErrorKind;
use thiserror::Error;

use crate::constants::{ENV_REPOSITORY, ENV_URI};

/// A setting that has no default and must be supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredSetting {
    Repository,
    Uri,
}

impl RequiredSetting {
    /// Long command-line flag that supplies this setting.
    pub const fn flag(self) -> &'static str {
        match self {
            Self::Repository => "--repository",
            Self::Uri => "--uri",
        }
    }

    /// Environment variable that supplies this setting.
    pub const fn env_var(self) -> &'static str {
        match self {
            Self::Repository => ENV_REPOSITORY,
            Self::Uri => ENV_URI,
        }
    }
}

impl fmt::Display for RequiredSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Missing required flag {} or {}",
            self.flag(),
            self.env_var()
        )
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// One or more required settings were not supplied.
    #[error("{}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
    Missing(Vec<RequiredSetting>),

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigError {
    /// Settings reported missing, empty for every other variant.
    pub fn missing_settings(&self) -> &[RequiredSetting] {
        match self {
            Self::Missing(settings) => settings,
            _ => &[],
        }
    }
}
