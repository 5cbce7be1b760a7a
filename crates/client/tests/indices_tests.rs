//! Index listing and resolution tests against a mock cluster.
//!
//! # Invariants
//! - Only `index` is read from each listing record
//! - Matching indices keep the cluster's listing order
//! - Non-200 listings and malformed bodies surface as distinct errors

mod common;

use common::*;
use wiremock::matchers::{method, path, query_param};

#[tokio::test]
async fn test_list_indices_fixture() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/_cat/indices"))
        .and(query_param("format", "json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("indices/cat_indices.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let transport = HttpTransport::default();
    let records = endpoints::list_indices(&transport, &mock_server.uri())
        .await
        .unwrap();

    let names: Vec<&str> = records.iter().map(|r| r.index.as_str()).collect();
    assert_eq!(
        names,
        vec!["logs-2016-03-12", "logs-2016-03-13", "metrics-2016-03-12"]
    );
}

#[tokio::test]
async fn test_resolve_indices_filters_by_substring() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/_cat/indices"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("indices/cat_indices.json")),
        )
        .mount(&mock_server)
        .await;

    let client = http_client(&mock_server, "backups");
    let indices = client.resolve_indices("2016-03-12").await.unwrap();

    assert_eq!(indices, vec!["logs-2016-03-12", "metrics-2016-03-12"]);
}

#[tokio::test]
async fn test_resolve_indices_empty_expression_matches_all() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/_cat/indices"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("indices/cat_indices.json")),
        )
        .mount(&mock_server)
        .await;

    let client = http_client(&mock_server, "backups");
    let indices = client.resolve_indices("").await.unwrap();

    assert_eq!(indices.len(), 3);
}

#[tokio::test]
async fn test_resolve_indices_empty_cluster() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/_cat/indices"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("indices/cat_indices_empty.json")),
        )
        .mount(&mock_server)
        .await;

    let client = http_client(&mock_server, "backups");
    assert!(client.resolve_indices("2016").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_indices_non_200_is_list_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/_cat/indices"))
        .respond_with(ResponseTemplate::new(401).set_body_string("missing authentication"))
        .mount(&mock_server)
        .await;

    let client = http_client(&mock_server, "backups");
    let err = client.resolve_indices("2016").await.unwrap_err();

    assert!(matches!(err, ClientError::ListIndicesFailed { status: 401 }));
    assert!(err.to_string().contains("401"));
}

#[tokio::test]
async fn test_list_indices_text_body_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/_cat/indices"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("green open logs-2016-03-12 q4Xn 5 1 1842031 0 1.2gb 617.4mb"),
        )
        .mount(&mock_server)
        .await;

    let client = http_client(&mock_server, "backups");
    let err = client.resolve_indices("2016").await.unwrap_err();

    assert!(matches!(err, ClientError::Decode { .. }));
}

#[tokio::test]
async fn test_list_indices_wrong_shape_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/_cat/indices"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "logs-2016-03-12": { "aliases": {} } })),
        )
        .mount(&mock_server)
        .await;

    let client = http_client(&mock_server, "backups");
    let err = client.resolve_indices("2016").await.unwrap_err();

    assert!(matches!(err, ClientError::Decode { status: None, .. }));
}

#[tokio::test]
async fn test_resolve_indices_preserves_listing_order() {
    let transport =
        RecordingTransport::new().respond(200, cat_indices_body(&["z-1", "a-1", "m-2", "b-1"]));
    let client = recording_client("http://es.local:9200", "backups", transport);

    let indices = client.resolve_indices("-1").await.unwrap();

    assert_eq!(indices, vec!["z-1", "a-1", "b-1"]);
}

#[tokio::test]
async fn test_resolve_indices_requests_cat_endpoint() {
    let transport = RecordingTransport::new().respond(200, "[]");
    let client = recording_client("http://es.local:9200", "backups", transport);

    client.resolve_indices("2016").await.unwrap();

    let requests = client.transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, reqwest::Method::GET);
    assert_eq!(
        requests[0].url,
        "http://es.local:9200/_cat/indices?format=json"
    );
    assert!(requests[0].body.is_none());
}

#[tokio::test]
async fn test_resolve_indices_unreadable_listing_body() {
    let transport = RecordingTransport::new().respond_with_unreadable_body(200, "stream reset");
    let client = recording_client("http://es.local:9200", "backups", transport);

    let err = client.resolve_indices("2016").await.unwrap_err();

    assert!(matches!(err, ClientError::Decode { status: Some(200), .. }));
    assert_eq!(
        std::error::Error::source(&err).map(ToString::to_string).as_deref(),
        Some("stream reset")
    );
}
