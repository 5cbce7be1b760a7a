//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

#[allow(unused_imports)]
pub use archive_client::testing::{RecordingTransport, load_fixture};

#[allow(unused_imports)]
pub use archive_client::{ArchiveClient, ClientError, HttpTransport, endpoints};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Client pointed at a mock server over the real HTTP transport.
#[allow(dead_code)]
pub fn http_client(server: &MockServer, repository: &str) -> ArchiveClient {
    ArchiveClient::builder()
        .base_url(server.uri())
        .repository(repository.to_string())
        .build()
        .expect("client should build")
}

/// Client over a canned-response transport.
#[allow(dead_code)]
pub fn recording_client(
    base_url: &str,
    repository: &str,
    transport: RecordingTransport,
) -> ArchiveClient<RecordingTransport> {
    ArchiveClient::with_transport(base_url, repository, transport).expect("client should build")
}

/// JSON text of an index listing with the given names.
#[allow(dead_code)]
pub fn cat_indices_body(names: &[&str]) -> String {
    let records: Vec<serde_json::Value> = names
        .iter()
        .map(|name| serde_json::json!({ "health": "green", "status": "open", "index": name }))
        .collect();
    serde_json::Value::Array(records).to_string()
}
