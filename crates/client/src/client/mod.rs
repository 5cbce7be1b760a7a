//! Snapshot client and its API methods.
//!
//! This module provides the primary [`ArchiveClient`], which resolves the
//! indices matching an expression and submits a snapshot of them.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `indices`: Index resolution (listing + substring filter)
//! - `snapshot`: Snapshot planning and submission
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Network I/O (delegated to a [`Transport`])
//!
//! # Invariants
//! - Endpoint and repository are fixed at construction and never mutated.
//! - `snapshot` never issues the write call unless index resolution succeeded.

pub mod builder;
mod indices;
mod snapshot;

pub use indices::filter_indices;

use crate::error::{ClientError, Result};
use crate::transport::{HttpTransport, Transport};

/// Client for one cluster and one snapshot repository.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use archive_client::ArchiveClient;
///
/// let client = ArchiveClient::builder()
///     .base_url("http://localhost:9200".to_string())
///     .repository("backups".to_string())
///     .build()?;
///
/// client.snapshot("2016-03-12").await?;
/// ```
#[derive(Debug)]
pub struct ArchiveClient<T = HttpTransport> {
    pub(crate) transport: T,
    pub(crate) base_url: String,
    pub(crate) repository: String,
}

impl ArchiveClient {
    /// Create a new client builder.
    pub fn builder() -> builder::ArchiveClientBuilder {
        builder::ArchiveClientBuilder::new()
    }
}

impl<T: Transport> ArchiveClient<T> {
    /// Construct a client over an arbitrary transport.
    ///
    /// Trailing slashes are removed from `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` is blank, or
    /// `repository` is blank.
    pub fn with_transport(base_url: &str, repository: &str, transport: T) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(ClientError::InvalidUrl("base_url is required".to_string()));
        }
        if repository.trim().is_empty() {
            return Err(ClientError::InvalidUrl(
                "repository is required to build a snapshot URL".to_string(),
            ));
        }

        Ok(Self {
            transport,
            base_url: base_url.to_string(),
            repository: repository.to_string(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the snapshot repository name.
    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// Get the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }
}
