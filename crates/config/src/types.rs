//! Resolved configuration for a single archive run.
//!
//! Responsibilities:
//! - Hold the validated values a snapshot run needs.
//! - Provide the derived snapshot name.
//!
//! Does NOT handle:
//! - Loading or merging values (see `loader` module).
//! - Network access (see the client crate).
//!
//! Invariants:
//! - `uri` is an absolute http(s) URL without trailing slashes.
//! - `repository` is non-empty; `expression` may be empty (matches every index).

use std::time::Duration;

use crate::constants::SNAPSHOT_NAME_PREFIX;

/// Validated configuration for one snapshot run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Substring filter over index names, also the snapshot-name suffix.
    pub expression: String,
    /// Pre-existing snapshot repository on the cluster.
    pub repository: String,
    /// Base URL of the cluster REST API (e.g., http://localhost:9200)
    pub uri: String,
    /// Request timeout. `None` leaves the HTTP client's default in place.
    pub timeout: Option<Duration>,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
}

impl Config {
    /// Name of the snapshot this configuration will create.
    pub fn snapshot_name(&self) -> String {
        format!("{SNAPSHOT_NAME_PREFIX}{}", self.expression)
    }
}
