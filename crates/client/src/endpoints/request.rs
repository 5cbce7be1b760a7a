//! Request dispatch shared by all endpoints.
//!
//! This module is the single place where transport failures become
//! [`ClientError::Transport`], so every endpoint logs and reports them the
//! same way. There is no retry: the first failure is final.

use tracing::debug;

use crate::error::{ClientError, Result};
use crate::redact::redact_url;
use crate::transport::{Transport, TransportRequest, TransportResponse};

/// Send `request` and return whatever the cluster answered.
///
/// # Errors
///
/// Returns [`ClientError::Transport`] if no response was received. The URL in
/// the error has any embedded credentials redacted. Non-200 statuses are
/// returned as `Ok` for the caller to classify.
pub async fn send<T: Transport>(transport: &T, request: TransportRequest) -> Result<TransportResponse> {
    let method = request.method.clone();
    let url = redact_url(&request.url);

    debug!(%method, %url, has_body = request.body.is_some(), "Sending request");

    match transport.perform_request(request).await {
        Ok(response) => {
            debug!(%method, %url, status = response.status, "Received response");
            Ok(response)
        }
        Err(source) => {
            debug!(%method, %url, error = %source, "Request failed before a response arrived");
            Err(ClientError::Transport {
                method,
                url,
                source,
            })
        }
    }
}
