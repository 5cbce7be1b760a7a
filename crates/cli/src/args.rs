//! Command-line argument definitions.
//!
//! Every flag can also come from the environment; explicit flags win over
//! environment variables, which win over `.env` entries. The string flags use
//! clap's env fallback. Timeout and skip-verify are read from the environment
//! by the config loader so a malformed value is reported as a config error.

use archive_config::constants::{ENV_EXPRESSION, ENV_REPOSITORY, ENV_URI};
use clap::Parser;

const AFTER_HELP: &str = "\
Examples:
  elasticsearch-archive --uri http://localhost:9200 --repository backups
  elasticsearch-archive -u http://localhost:9200 -r backups -e 2016-03-12

A successful run prints nothing. Set RUST_LOG=debug to trace both requests.";

#[derive(Parser, Debug)]
#[command(name = "elasticsearch-archive")]
#[command(about = "Snapshot every index whose name contains an expression", long_about = None)]
#[command(version, after_help = AFTER_HELP)]
pub struct Cli {
    /// Expression to snapshot. '2016-03-12' creates 'auto-snapshot-2016-03-12'
    /// holding every index whose name contains '2016-03-12' [default: yesterday]
    #[arg(short, long, env = ENV_EXPRESSION)]
    pub expression: Option<String>,

    /// Snapshot repository, already registered on the cluster
    #[arg(short, long, env = ENV_REPOSITORY)]
    pub repository: Option<String>,

    /// Cluster URI (e.g. http://localhost:9200)
    #[arg(short, long, env = ENV_URI)]
    pub uri: Option<String>,

    /// Per-request timeout in seconds [env: ELASTICSEARCH_ARCHIVE_TIMEOUT] [default: none]
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Skip TLS certificate verification, HTTPS only [env: ELASTICSEARCH_ARCHIVE_SKIP_VERIFY]
    #[arg(long)]
    pub skip_verify: bool,
}

/// Trim a flag value; empty or whitespace-only values count as unset.
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
