//! Single-document classification endpoint.

use cax_core::ClassificationResult;

use crate::{ApiClient, ClientError};

impl ApiClient {
    /// Classify one uploaded PDF at `/api/classify-document`.
    ///
    /// The file travels as the multipart `file` part. The endpoint works
    /// anonymously; pass a token to use the protected variant.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the server rejects the
    /// document, or the response cannot be parsed.
    pub async fn classify_document(
        &self,
        filename: &str,
        bytes: Vec<u8>,
        token: Option<&str>,
    ) -> Result<ClassificationResult, ClientError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);
        self.post_multipart("/api/classify-document", form, token)
            .await
    }
}
