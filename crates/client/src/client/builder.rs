//! Client builder for constructing [`ArchiveClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url, repository)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, TLS verification)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`ArchiveClient`] methods)
//! - Retries (there are none; the first failure is final)
//!
//! # Invariants
//! - `base_url` and `repository` are required fields and must be provided before calling `build()`
//! - No timeout is applied unless one is configured
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use archive_config::Config;

use crate::client::ArchiveClient;
use crate::error::{ClientError, Result};
use crate::transport::{HttpTransport, Transport};

/// Builder for creating a new [`ArchiveClient`].
///
/// # Example
///
/// ```rust,ignore
/// use archive_client::ArchiveClient;
///
/// let client = ArchiveClient::builder()
///     .base_url("https://es.example.com:9200".to_string())
///     .repository("backups".to_string())
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// ```
#[derive(Debug, Default)]
pub struct ArchiveClientBuilder {
    base_url: Option<String>,
    repository: Option<String>,
    skip_verify: bool,
    timeout: Option<Duration>,
}

impl ArchiveClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the cluster, e.g. `http://localhost:9200`.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the snapshot repository the client writes into.
    pub fn repository(mut self, repository: String) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this for clusters with self-signed certificates on trusted
    /// networks.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set a request timeout. By default none is applied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Create a client builder from configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.uri.clone());
        self.repository = Some(config.repository.clone());
        self.skip_verify = config.skip_verify;
        self.timeout = config.timeout;
        self
    }

    fn required(self) -> Result<(String, String)> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let repository = self.repository.ok_or_else(|| {
            ClientError::InvalidUrl("repository is required to build a snapshot URL".to_string())
        })?;
        Ok((base_url, repository))
    }

    /// Build the [`ArchiveClient`] over a `reqwest` transport.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` or `repository` was not provided.
    /// Returns [`ClientError::HttpClient`] if the HTTP client fails to build.
    pub fn build(self) -> Result<ArchiveClient> {
        let mut http_builder = reqwest::Client::builder();

        if let Some(timeout) = self.timeout {
            http_builder = http_builder.timeout(timeout);
        }

        if self.skip_verify {
            let is_https = self
                .base_url
                .as_deref()
                .is_some_and(|url| url.trim_start().starts_with("https://"));
            if is_https {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;
        self.build_with_transport(HttpTransport::new(http))
    }

    /// Build the [`ArchiveClient`] over a caller-supplied transport.
    ///
    /// `timeout` and `skip_verify` are properties of the HTTP transport and are
    /// ignored here.
    pub fn build_with_transport<T: Transport>(self, transport: T) -> Result<ArchiveClient<T>> {
        let (base_url, repository) = self.required()?;
        ArchiveClient::with_transport(&base_url, &repository, transport)
    }
}
