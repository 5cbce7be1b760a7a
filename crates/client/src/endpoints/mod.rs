//! REST API endpoint implementations.
//!
//! Each function performs exactly one request through a [`Transport`] and
//! maps the response onto the crate's error taxonomy. Composition (resolve,
//! then submit) lives on [`ArchiveClient`](crate::ArchiveClient).
//!
//! [`Transport`]: crate::transport::Transport

mod indices;
mod request;
mod snapshot;

pub use indices::{cat_indices_url, list_indices};
pub use request::send;
pub use snapshot::{create_snapshot, snapshot_name, snapshot_url};
