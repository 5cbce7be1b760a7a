//! Snapshot planning and submission for [`ArchiveClient`].
//!
//! A run moves through `ResolvingIndices -> Submitting -> Done | Failed`.
//! Resolution failures end the run before anything is written.

use tracing::{Instrument, debug, info_span, warn};

use crate::client::ArchiveClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::SnapshotPlan;
use crate::transport::Transport;

impl<T: Transport> ArchiveClient<T> {
    /// URL the snapshot for `expression` will be written to.
    pub fn snapshot_url(&self, expression: &str) -> String {
        endpoints::snapshot_url(
            &self.base_url,
            &self.repository,
            &endpoints::snapshot_name(expression),
        )
    }

    /// Resolve indices and compute everything the submission would send,
    /// without writing anything.
    pub async fn plan(&self, expression: &str) -> Result<SnapshotPlan> {
        let name = endpoints::snapshot_name(expression);
        let url = self.snapshot_url(expression);
        let indices = self.resolve_indices(expression).await?;

        if indices.is_empty() {
            warn!(
                %expression,
                "No indices match the expression; the snapshot request will name no indices"
            );
        }

        Ok(SnapshotPlan { name, url, indices })
    }

    /// Snapshot every index whose name contains `expression` into
    /// `auto-snapshot-<expression>`.
    ///
    /// Success means the cluster accepted the request with HTTP 200; the
    /// snapshot itself may still be running on the cluster.
    ///
    /// # Errors
    ///
    /// Any resolution error is returned before the write is attempted.
    /// See [`endpoints::create_snapshot`] for write errors.
    pub async fn snapshot(&self, expression: &str) -> Result<SnapshotPlan> {
        let span = info_span!(
            "snapshot",
            repository = %self.repository,
            snapshot = %endpoints::snapshot_name(expression),
        );

        self.submit(expression).instrument(span).await
    }

    async fn submit(&self, expression: &str) -> Result<SnapshotPlan> {
        let plan = self.plan(expression).await?;

        endpoints::create_snapshot(&self.transport, &plan.url, &plan.body())
            .instrument(info_span!("create_snapshot", indices = plan.indices.len()))
            .await?;

        debug!(indices = plan.indices.len(), "Snapshot submitted");
        Ok(plan)
    }
}
