//! Claim-text normalization endpoint.

use cax_core::NormalizedClaim;
use serde::Serialize;

use crate::{ApiClient, ClientError};

#[derive(Serialize)]
struct NormalizeRequest<'a> {
    text: &'a str,
}

impl ApiClient {
    /// Normalize free-form claim notes at `/api/normalize-claim`.
    ///
    /// The response is an open-ended structured object carried verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the response cannot be
    /// parsed.
    pub async fn normalize_claim(
        &self,
        text: &str,
        token: Option<&str>,
    ) -> Result<NormalizedClaim, ClientError> {
        self.post_json("/api/normalize-claim", &NormalizeRequest { text }, token)
            .await
    }
}
