//! # cax-client
//!
//! HTTP client for the ClaimAxis claim-intelligence API.
//!
//! One [`ApiClient`] wraps all outbound requests: JSON and multipart call
//! shapes, optional bearer-credential attachment, and uniform error
//! extraction (`detail` field with a status-code fallback). The client never
//! mutates any state beyond the network call itself; session persistence is
//! `cax-auth`'s job and presentation is the CLI's.
//!
//! Endpoint wrappers live in per-flow modules:
//! - `auth` — `/auth/login`, `/auth/logout`
//! - `classify` — `/api/classify-document` (multipart)
//! - `normalize` — `/api/normalize-claim`
//! - `fraud` — `/api/fraud-score`
//! - `pipeline` — `/api/pipeline-from-pdf` (multipart), `/api/pipeline-from-text`
//! - `chart` — `/api/chart/{document,normalize,fraud}` URL construction + fetch

pub mod auth;
pub mod chart;
pub mod classify;
pub mod fraud;
pub mod normalize;
pub mod pipeline;

mod error;
mod http;

pub use chart::ChartKind;
pub use error::ClientError;
pub use pipeline::PipelineRequest;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// HTTP client for the claim-intelligence backend.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client against `base_url`.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("claimaxis/0.1")
                .timeout(std::time::Duration::from_secs(timeout_secs))
                .build()
                .expect("reqwest client should build"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The configured API origin, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// POST a JSON body, attaching the bearer credential when one is given.
    pub(crate) async fn post_json<B, T>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<T, ClientError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let mut req = self.http.post(self.url(path)).json(body);
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }

        tracing::debug!(path, authenticated = token.is_some(), "POST json");
        let resp = http::check_response(req.send().await?).await?;
        resp.json::<T>()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }

    /// POST a multipart form, attaching the bearer credential when one is
    /// given. File uploads cannot be JSON-encoded, hence the distinct shape.
    pub(crate) async fn post_multipart<T>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
        token: Option<&str>,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let mut req = self.http.post(self.url(path)).multipart(form);
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }

        tracing::debug!(path, authenticated = token.is_some(), "POST multipart");
        let resp = http::check_response(req.send().await?).await?;
        resp.json::<T>()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }

    pub(crate) async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, ClientError> {
        let resp = http::check_response(self.http.get(url).send().await?).await?;
        Ok(resp.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let client = ApiClient::new("http://localhost:8000/", 30);
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(
            client.url("/api/classify-document"),
            "http://localhost:8000/api/classify-document"
        );
    }
}
