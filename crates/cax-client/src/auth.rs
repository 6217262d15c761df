//! Login and logout against the backend's auth endpoints.

use cax_core::Session;
use serde::Serialize;

use crate::{ApiClient, ClientError};

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

impl ApiClient {
    /// Exchange credentials for a session at `/auth/login`.
    ///
    /// Posts unauthenticated; the caller persists the returned session.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the server rejects the
    /// credentials, or the response cannot be parsed.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ClientError> {
        self.post_json("/auth/login", &LoginRequest { email, password }, None)
            .await
    }

    /// Notify the server of logout at `/auth/logout`.
    ///
    /// The response body is opaque and discarded. Callers treat this as
    /// best-effort: the local session is cleared whether or not the notify
    /// succeeds, so a flaky network never blocks the user's intent to leave.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the server returns a
    /// non-success status.
    pub async fn logout(&self, token: &str) -> Result<(), ClientError> {
        let resp = self
            .http
            .post(self.url("/auth/logout"))
            .bearer_auth(token)
            .send()
            .await?;
        crate::http::check_response(resp).await?;
        Ok(())
    }
}
