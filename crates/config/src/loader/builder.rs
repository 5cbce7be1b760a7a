//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from `.env`, environment variables, and direct builder methods.
//! - Build and validate the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Reading the system clock (the caller passes `today` to `build_for_date`).
//!
//! Invariants / Assumptions:
//! - Builder methods called after `from_env()` take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.
//! - Missing required settings are all reported at once, not one at a time.

use chrono::NaiveDate;
use std::time::Duration;

use super::defaults::default_expression;
use super::env::apply_env;
use super::error::{ConfigError, RequiredSetting};
use crate::constants::{ENV_DOTENV_DISABLED, ENV_TIMEOUT, ENV_URI, MAX_TIMEOUT_SECS};
use crate::types::Config;

/// Configuration loader that builds config from environment variables and overrides.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    expression: Option<String>,
    repository: Option<String>,
    uri: Option<String>,
    timeout: Option<Duration>,
    skip_verify: Option<bool>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the expression (index filter and snapshot-name suffix).
    pub fn with_expression(mut self, expression: String) -> Self {
        self.expression = Some(expression);
        self
    }

    /// Set the snapshot repository name.
    pub fn with_repository(mut self, repository: String) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Set the cluster URI.
    pub fn with_uri(mut self, uri: String) -> Self {
        self.uri = Some(uri);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set whether to skip TLS verification.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Build the final configuration, defaulting the expression from the local date.
    pub fn build(self) -> Result<Config, ConfigError> {
        let today = chrono::Local::now().date_naive();
        self.build_for_date(today)
    }

    /// Build the final configuration using `today` for the expression default.
    pub fn build_for_date(self, today: NaiveDate) -> Result<Config, ConfigError> {
        let repository = non_blank(self.repository);
        let uri = non_blank(self.uri);

        let mut missing = Vec::new();
        if repository.is_none() {
            missing.push(RequiredSetting::Repository);
        }
        if uri.is_none() {
            missing.push(RequiredSetting::Uri);
        }

        let (Some(repository), Some(uri)) = (repository, uri) else {
            return Err(ConfigError::Missing(missing));
        };

        let uri = validate_and_normalize_uri(&uri)?;

        if let Some(timeout) = self.timeout {
            validate_timeout(timeout)?;
        }

        let expression = self.expression.unwrap_or_else(|| {
            let expression = default_expression(today);
            tracing::debug!(%expression, "No expression configured, defaulting to yesterday");
            expression
        });

        Ok(Config {
            expression,
            repository,
            uri,
            timeout: self.timeout,
            skip_verify: self.skip_verify.unwrap_or(false),
        })
    }

    pub(crate) fn set_expression(&mut self, expression: Option<String>) {
        self.expression = expression;
    }

    pub(crate) fn set_repository(&mut self, repository: Option<String>) {
        self.repository = repository;
    }

    pub(crate) fn set_uri(&mut self, uri: Option<String>) {
        self.uri = uri;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_skip_verify(&mut self, skip: Option<bool>) {
        self.skip_verify = skip;
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Validate the cluster URI and strip trailing slashes.
///
/// The URI is checked with `url::Url` but the caller's spelling is kept,
/// so `<uri>/_snapshot/...` is formed from exactly what was configured.
fn validate_and_normalize_uri(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: ENV_URI.into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. http://localhost:9200): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: ENV_URI.into(),
            message: format!(
                "scheme must be http or https (e.g. http://localhost:9200), got: {scheme}"
            ),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: ENV_URI.into(),
            message: "host is required (e.g. http://localhost:9200)".into(),
        });
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}

fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
    let secs = timeout.as_secs();
    if secs == 0 {
        return Err(ConfigError::InvalidValue {
            var: ENV_TIMEOUT.into(),
            message: "timeout must be greater than 0 seconds".into(),
        });
    }
    if secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::InvalidValue {
            var: ENV_TIMEOUT.into(),
            message: format!(
                "timeout exceeds maximum allowed value of {} seconds",
                MAX_TIMEOUT_SECS
            ),
        });
    }
    Ok(())
}
