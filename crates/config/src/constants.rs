//! Centralized constants for the elasticsearch-archive workspace.
//!
//! Environment variable names live here so the config loader, the CLI's
//! clap `env` bindings and the hermetic test helpers cannot drift apart.

// =============================================================================
// Environment Variables
// =============================================================================

/// Substring filter and snapshot-name suffix.
pub const ENV_EXPRESSION: &str = "ELASTICSEARCH_ARCHIVE_EXPRESSION";

/// Name of the pre-registered snapshot repository.
pub const ENV_REPOSITORY: &str = "ELASTICSEARCH_ARCHIVE_REPOSITORY";

/// Base URL of the cluster REST API.
pub const ENV_URI: &str = "ELASTICSEARCH_ARCHIVE_URI";

/// Optional request timeout in seconds.
pub const ENV_TIMEOUT: &str = "ELASTICSEARCH_ARCHIVE_TIMEOUT";

/// Skip TLS certificate verification (`true`/`false`).
pub const ENV_SKIP_VERIFY: &str = "ELASTICSEARCH_ARCHIVE_SKIP_VERIFY";

/// Set to `1` or `true` to skip `.env` loading.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

// =============================================================================
// Snapshot Naming
// =============================================================================

/// Prefix of every snapshot this tool creates.
pub const SNAPSHOT_NAME_PREFIX: &str = "auto-snapshot-";

/// Date format used for the default expression (`2016-03-12`).
pub const DEFAULT_EXPRESSION_DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Timeout Bounds
// =============================================================================

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;
