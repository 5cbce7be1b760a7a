//! Error types for the archive client.

use reqwest::Method;
use thiserror::Error;

/// Boxed error produced by a [`Transport`](crate::transport::Transport).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while resolving indices or submitting a snapshot.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The cluster could not be reached (DNS, connection refused, transport timeout).
    #[error("Transport error during {method} {url}")]
    Transport {
        method: Method,
        url: String,
        #[source]
        source: BoxError,
    },

    /// The index listing endpoint answered with a non-200 status.
    #[error("Received non 200 status code while retrieving indices: {status}")]
    ListIndicesFailed { status: u16 },

    /// The snapshot endpoint answered with a non-200 status.
    #[error("Received non 200 status code creating snapshot: {status}\n{body}")]
    SnapshotCreationFailed { status: u16, body: String },

    /// A response body could not be read or parsed.
    #[error("Failed to decode {context}{}", .status.map(|s| format!(" (status {s})")).unwrap_or_default())]
    Decode {
        context: String,
        status: Option<u16>,
        #[source]
        source: BoxError,
    },

    /// Invalid base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

impl ClientError {
    /// HTTP status carried by this error, if the cluster answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ListIndicesFailed { status } | Self::SnapshotCreationFailed { status, .. } => {
                Some(*status)
            }
            Self::Decode { status, .. } => *status,
            _ => None,
        }
    }

    /// Check if this error means the cluster was never reached.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}
