//! Exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define the exit codes a cron job or wrapper script can branch on.
//! - Map [`ClientError`] variants and HTTP statuses to those codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Every failure exits non-zero.
//! - Codes 1-8 keep the same meaning across releases.

use archive_client::ClientError;

/// Structured exit codes for elasticsearch-archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// The cluster accepted the snapshot request.
    Success = 0,

    /// Configuration problem, undecodable response or unexpected status.
    GeneralError = 1,

    /// HTTP 401 from either call.
    ///
    /// Scripts should check the credentials embedded in the URI.
    AuthenticationFailed = 2,

    /// The cluster could not be reached (DNS, refused connection, timeout).
    ///
    /// Scripts may retry later.
    ConnectionError = 3,

    /// HTTP 404, usually an unregistered snapshot repository.
    NotFound = 4,

    /// HTTP 403.
    PermissionDenied = 6,

    /// HTTP 502, 503 or 504.
    ///
    /// Scripts should back off and retry later.
    ServiceUnavailable = 8,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }

    fn from_status(status: u16) -> Self {
        match status {
            401 => ExitCode::AuthenticationFailed,
            403 => ExitCode::PermissionDenied,
            404 => ExitCode::NotFound,
            502..=504 => ExitCode::ServiceUnavailable,
            _ => ExitCode::GeneralError,
        }
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::Transport { .. } => ExitCode::ConnectionError,

            ClientError::ListIndicesFailed { status }
            | ClientError::SnapshotCreationFailed { status, .. } => Self::from_status(*status),

            // The cluster answered but the body was unusable
            ClientError::Decode { .. } => ExitCode::GeneralError,

            ClientError::InvalidUrl(_) | ClientError::HttpClient(_) => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no ClientError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ClientError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
