//! Index resolution for [`ArchiveClient`].
//!
//! # What this module handles:
//! - Listing every index and keeping those whose name contains the expression
//!
//! # What this module does NOT handle:
//! - The listing HTTP call itself (in [`crate::endpoints`])

use tracing::debug;

use crate::client::ArchiveClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::IndexRecord;
use crate::transport::Transport;

/// Names of the records whose `index` contains `expression`, in input order.
///
/// Matching is plain case-sensitive substring containment; an empty
/// expression keeps every record.
pub fn filter_indices(records: Vec<IndexRecord>, expression: &str) -> Vec<String> {
    records
        .into_iter()
        .map(|record| record.index)
        .filter(|index| index.contains(expression))
        .collect()
}

impl<T: Transport> ArchiveClient<T> {
    /// Resolve the indices whose name contains `expression`.
    ///
    /// Order follows the cluster's listing. No pagination: the listing is
    /// assumed to be complete.
    #[tracing::instrument(name = "resolve_indices", skip(self))]
    pub async fn resolve_indices(&self, expression: &str) -> Result<Vec<String>> {
        let records = endpoints::list_indices(&self.transport, &self.base_url).await?;
        let total = records.len();
        let indices = filter_indices(records, expression);

        debug!(total, matched = indices.len(), "Resolved indices");
        Ok(indices)
    }
}
