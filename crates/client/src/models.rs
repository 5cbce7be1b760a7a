//! Wire types for the cluster REST API.
//!
//! Only the fields this tool consumes are modelled; everything else in the
//! cluster's responses is ignored during deserialization.

use serde::{Deserialize, Serialize};

/// One row of `GET /_cat/indices?format=json`.
///
/// The listing carries many more columns (`health`, `docs.count`, ...);
/// only the name matters here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IndexRecord {
    pub index: String,
}

/// Body of `PUT /_snapshot/<repository>/<name>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotRequestBody {
    /// Comma-joined index names, in listing order.
    pub indices: String,
}

impl SnapshotRequestBody {
    /// Join `indices` with commas. An empty slice yields an empty string.
    pub fn from_indices<S: AsRef<str>>(indices: &[S]) -> Self {
        Self {
            indices: indices
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

/// Everything a snapshot submission will send, computed before any write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotPlan {
    /// `auto-snapshot-<expression>`
    pub name: String,
    /// `<endpoint>/_snapshot/<repository>/<name>`
    pub url: String,
    /// Matching index names, in listing order.
    pub indices: Vec<String>,
}

impl SnapshotPlan {
    /// The request body for this plan.
    pub fn body(&self) -> SnapshotRequestBody {
        SnapshotRequestBody::from_indices(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_record_ignores_extra_columns() {
        let records: Vec<IndexRecord> = serde_json::from_str(
            r#"[{"health":"green","status":"open","index":"logs-2016-03-12","docs.count":"12"}]"#,
        )
        .unwrap();

        assert_eq!(records[0].index, "logs-2016-03-12");
    }

    #[test]
    fn test_index_record_requires_index_field() {
        let result: Result<Vec<IndexRecord>, _> =
            serde_json::from_str(r#"[{"health":"green"}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_body_serializes_comma_joined() {
        let body = SnapshotRequestBody::from_indices(&["logs-2016-03-12", "metrics-2016-03-12"]);
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"indices":"logs-2016-03-12,metrics-2016-03-12"}"#
        );
    }

    #[test]
    fn test_empty_body_serializes_empty_string() {
        let body = SnapshotRequestBody::from_indices::<String>(&[]);
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"indices":""}"#);
    }
}
