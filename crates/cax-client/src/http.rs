//! Shared HTTP response helpers.
//!
//! Centralizes the non-success → [`ClientError::Api`] conversion so endpoint
//! modules stay focused on request construction and response mapping. The
//! server's error contract is JSON with a `detail` field, but that is not
//! guaranteed on every failure mode (gateway errors, network-layer rejects),
//! so extraction always falls back to a generic status message.

use crate::error::ClientError;

/// Check an HTTP response for error conditions.
///
/// Returns the response unchanged on success. A non-success status becomes
/// [`ClientError::Api`] with the extracted `detail` message, or
/// `request failed with status <code>` when the body is not the expected
/// JSON shape.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    Err(ClientError::Api {
        status: status.as_u16(),
        message: extract_detail(&body, status.as_u16()),
    })
}

/// Pull the `detail` field out of a JSON error body, with mandatory fallback.
fn extract_detail(body: &str, status: u16) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail")?.as_str().map(str::to_string))
        .unwrap_or_else(|| format!("request failed with status {status}"))
}
