//! Snapshot creation endpoint.

use archive_config::constants::SNAPSHOT_NAME_PREFIX;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::SnapshotRequestBody;
use crate::transport::{Transport, TransportRequest};

use super::request::send;

/// `auto-snapshot-<expression>`
pub fn snapshot_name(expression: &str) -> String {
    format!("{SNAPSHOT_NAME_PREFIX}{expression}")
}

/// `<base_url>/_snapshot/<repository>/<snapshot_name>`.
///
/// Nothing is escaped or normalised here: all three parts are interpolated
/// as-is. Trailing slashes on the endpoint are stripped earlier, by
/// [`ArchiveClient::with_transport`](crate::ArchiveClient::with_transport)
/// and the config loader, so a base URL passed in directly keeps them.
pub fn snapshot_url(base_url: &str, repository: &str, snapshot_name: &str) -> String {
    format!("{}/_snapshot/{}/{}", base_url, repository, snapshot_name)
}

/// `PUT` a snapshot-creation request. Only HTTP 200 counts as accepted.
///
/// # Errors
///
/// - [`ClientError::Transport`] if the cluster is unreachable.
/// - [`ClientError::SnapshotCreationFailed`] on any other status, with the response body.
/// - [`ClientError::Decode`] if that error body could not be read; the status is kept.
pub async fn create_snapshot<T: Transport>(
    transport: &T,
    url: &str,
    body: &SnapshotRequestBody,
) -> Result<()> {
    let json = serde_json::to_string(body).map_err(|e| ClientError::Decode {
        context: "snapshot request body".to_string(),
        status: None,
        source: e.into(),
    })?;

    let response = send(transport, TransportRequest::put_json(url, json)).await?;

    if response.is_ok() {
        debug!(status = response.status, "Snapshot request accepted");
        return Ok(());
    }

    let status = response.status;
    match response.body {
        Ok(body) => Err(ClientError::SnapshotCreationFailed { status, body }),
        Err(source) => Err(ClientError::Decode {
            context: "body of non 200 response on snapshot create".to_string(),
            status: Some(status),
            source,
        }),
    }
}
