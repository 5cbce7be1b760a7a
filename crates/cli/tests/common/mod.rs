//! Shared test utilities for elasticsearch-archive integration tests.
//!
//! Invariants / Assumptions:
//! - Every command built here ignores the developer's `.env` and host
//!   `ELASTICSEARCH_ARCHIVE_*` variables.
//! - `RUST_LOG` is cleared so the default `warn` filter applies.

use assert_cmd::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ARCHIVE_ENV_VARS: &[&str] = &[
    "ELASTICSEARCH_ARCHIVE_EXPRESSION",
    "ELASTICSEARCH_ARCHIVE_REPOSITORY",
    "ELASTICSEARCH_ARCHIVE_URI",
    "ELASTICSEARCH_ARCHIVE_TIMEOUT",
    "ELASTICSEARCH_ARCHIVE_SKIP_VERIFY",
];

/// Returns a hermetic `elasticsearch-archive` command with no settings applied.
pub fn bare_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("elasticsearch-archive");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");
    cmd.env_remove("RUST_LOG");

    for var in ARCHIVE_ENV_VARS {
        cmd.env_remove(var);
    }

    cmd
}

/// Returns a hermetic command pointed at `uri`, repository `backups` and
/// expression `2016-03-12`.
#[allow(dead_code)]
pub fn archive_cmd(uri: &str) -> Command {
    let mut cmd = bare_cmd();
    cmd.env("ELASTICSEARCH_ARCHIVE_URI", uri)
        .env("ELASTICSEARCH_ARCHIVE_REPOSITORY", "backups")
        .env("ELASTICSEARCH_ARCHIVE_EXPRESSION", "2016-03-12");
    cmd
}

/// `_cat/indices?format=json` body naming `names`.
#[allow(dead_code)]
pub fn cat_indices_body(names: &[&str]) -> serde_json::Value {
    serde_json::Value::Array(
        names
            .iter()
            .map(|name| serde_json::json!({ "health": "green", "status": "open", "index": name }))
            .collect(),
    )
}

/// Mount a listing that answers 200 with `names`.
#[allow(dead_code)]
pub async fn mount_indices(server: &MockServer, names: &[&str]) {
    Mock::given(method("GET"))
        .and(path("/_cat/indices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(cat_indices_body(names)))
        .mount(server)
        .await;
}
