//! Snapshot client for search-cluster REST APIs.
//!
//! This crate lists a cluster's indices, keeps those whose name contains an
//! expression, and asks the cluster to snapshot them into a pre-registered
//! repository as `auto-snapshot-<expression>`.
//!
//! All network access goes through the [`Transport`] trait so the resolver
//! and submitter can be exercised without a cluster.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
mod redact;
pub mod transport;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use client::builder::ArchiveClientBuilder;
pub use client::{ArchiveClient, filter_indices};
pub use error::{BoxError, ClientError, Result};
pub use models::{IndexRecord, SnapshotPlan, SnapshotRequestBody};
pub use redact::redact_url;
pub use transport::{HttpTransport, Method, Transport, TransportRequest, TransportResponse};
