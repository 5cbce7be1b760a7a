//! The snapshot run: resolve matching indices, then submit one snapshot.

use anyhow::{Context, Result};
use archive_client::ArchiveClient;
use archive_config::Config;
use tracing::info;

pub async fn run(config: &Config) -> Result<()> {
    let client = ArchiveClient::builder()
        .from_config(config)
        .build()
        .context("Failed to build cluster client")?;

    let plan = client
        .snapshot(&config.expression)
        .await
        .context("Error during snapshot")?;

    info!(
        snapshot = %plan.name,
        indices = plan.indices.len(),
        "Snapshot request accepted"
    );

    Ok(())
}
