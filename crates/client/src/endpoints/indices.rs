//! Index listing endpoint.

use crate::error::{ClientError, Result};
use crate::models::IndexRecord;
use crate::transport::{Transport, TransportRequest};

use super::request::send;

/// `GET` URL for the index listing.
///
/// `format=json` makes `_cat` answer with a JSON array even on clusters
/// whose `_cat` default is plain text.
pub fn cat_indices_url(base_url: &str) -> String {
    format!("{}/_cat/indices?format=json", base_url)
}

/// List every index on the cluster, in the order the cluster returns them.
///
/// # Errors
///
/// - [`ClientError::Transport`] if the cluster is unreachable.
/// - [`ClientError::ListIndicesFailed`] on any status other than 200.
/// - [`ClientError::Decode`] if the body is not a JSON array of `{"index": ...}` records.
pub async fn list_indices<T: Transport>(transport: &T, base_url: &str) -> Result<Vec<IndexRecord>> {
    let response = send(transport, TransportRequest::get(cat_indices_url(base_url))).await?;

    let status = response.status;
    if !response.is_ok() {
        return Err(ClientError::ListIndicesFailed { status });
    }

    let body = response.body.map_err(|source| ClientError::Decode {
        context: "index listing".to_string(),
        status: Some(status),
        source,
    })?;

    serde_json::from_str(&body).map_err(|e| ClientError::Decode {
        context: "index listing".to_string(),
        status: None,
        source: e.into(),
    })
}
