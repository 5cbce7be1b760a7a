//! HTTP transport seam.
//!
//! Everything the client needs from the network is one capability:
//! perform a request and hand back the status and body. [`HttpTransport`]
//! implements it with `reqwest`; tests substitute
//! [`RecordingTransport`](crate::testing::RecordingTransport) or point
//! `HttpTransport` at a mock server.
//!
//! # Invariants
//! - A request body is always JSON and is sent with `content-type: application/json`.
//! - The transport never interprets the status code; callers decide what success means.
//! - A body that cannot be read does not discard the status code.

use std::future::Future;

pub use reqwest::Method;
use reqwest::header::CONTENT_TYPE;

use crate::error::BoxError;

/// A single request to the cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    /// JSON-encoded body, if any.
    pub body: Option<String>,
}

impl TransportRequest {
    /// A bodiless `GET`.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            body: None,
        }
    }

    /// A `PUT` carrying a JSON body.
    pub fn put_json(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method: Method::PUT,
            url: url.into(),
            body: Some(body.into()),
        }
    }
}

/// The cluster's answer to a [`TransportRequest`].
#[derive(Debug)]
pub struct TransportResponse {
    pub status: u16,
    /// Response body text, or the error hit while reading it.
    pub body: std::result::Result<String, BoxError>,
}

impl TransportResponse {
    /// A response whose body was read successfully.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: Ok(body.into()),
        }
    }

    /// A response whose status arrived but whose body could not be read.
    pub fn with_unreadable_body(status: u16, error: impl Into<BoxError>) -> Self {
        Self {
            status,
            body: Err(error.into()),
        }
    }

    /// Only HTTP 200 counts as success for both cluster calls.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Minimal capability the client needs from the network.
///
/// An `Err` means no response was received at all (DNS failure,
/// connection refused, transport timeout).
pub trait Transport: Send + Sync {
    fn perform_request(
        &self,
        request: TransportRequest,
    ) -> impl Future<Output = std::result::Result<TransportResponse, BoxError>> + Send;
}

/// [`Transport`] backed by a `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Wrap an already-configured `reqwest::Client`.
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    async fn execute(
        &self,
        request: TransportRequest,
    ) -> std::result::Result<TransportResponse, BoxError> {
        let mut builder = self.http.request(request.method, request.url.as_str());
        if let Some(body) = request.body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(BoxError::from);

        Ok(TransportResponse { status, body })
    }
}

impl Transport for HttpTransport {
    fn perform_request(
        &self,
        request: TransportRequest,
    ) -> impl Future<Output = std::result::Result<TransportResponse, BoxError>> + Send {
        self.execute(request)
    }
}
