//! Testing utilities for archive client tests.
//!
//! This module provides a canned-response [`Transport`] and a fixture loader.
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use archive_client::testing::{RecordingTransport, load_fixture};
//!
//! let transport = RecordingTransport::new()
//!     .respond(200, load_fixture("indices/cat_indices.json").to_string())
//!     .respond(200, r#"{"accepted":true}"#);
//! ```

use std::collections::VecDeque;
use std::future::{Future, ready};
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use crate::error::BoxError;
use crate::transport::{Transport, TransportRequest, TransportResponse};

/// Load a JSON fixture file from the fixtures directory.
///
/// # Arguments
/// * `fixture_path` - Relative path within the fixtures directory (e.g., "indices/cat_indices.json")
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let fixture_dir = manifest_dir.join("fixtures");
    let full_path = fixture_dir.join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// A [`Transport`] that replays queued outcomes in order and records every request.
///
/// Once the queue is empty, further requests fail as transport errors.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    outcomes: Mutex<VecDeque<Result<TransportResponse, BoxError>>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with a readable body.
    pub fn respond(self, status: u16, body: impl Into<String>) -> Self {
        self.push(Ok(TransportResponse::new(status, body)))
    }

    /// Queue a response whose body fails to read.
    pub fn respond_with_unreadable_body(self, status: u16, error: &str) -> Self {
        self.push(Ok(TransportResponse::with_unreadable_body(status, error)))
    }

    /// Queue a transport failure (no response at all).
    pub fn fail(self, error: &str) -> Self {
        self.push(Err(error.into()))
    }

    fn push(self, outcome: Result<TransportResponse, BoxError>) -> Self {
        self.outcomes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(outcome);
        self
    }

    /// Every request performed so far, oldest first.
    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Transport for RecordingTransport {
    fn perform_request(
        &self,
        request: TransportRequest,
    ) -> impl Future<Output = Result<TransportResponse, BoxError>> + Send {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        let outcome = self
            .outcomes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| Err("RecordingTransport has no queued response".into()));

        ready(outcome)
    }
}
