//! Combined classify → normalize → score pipeline endpoints.
//!
//! The chaining happens server-side: one multipart POST returns the atomic
//! [`PipelineResult`]. Optional accompanying fields attach only when present
//! and non-empty, so an absent field never overrides a server-side default
//! with an empty string.

use cax_core::PipelineResult;
use serde::Serialize;

use crate::{ApiClient, ClientError};

/// Everything that goes into one `/api/pipeline-from-pdf` invocation.
#[derive(Debug, Clone)]
pub struct PipelineRequest {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub claim_text: Option<String>,
    pub claimed_amount: Option<i64>,
    pub estimated_amount: Option<i64>,
}

impl PipelineRequest {
    /// The non-file multipart parts this request will carry, in order.
    ///
    /// `claim_text` is attached only when present and non-blank; the amounts
    /// only when present. Kept separate from form construction so the
    /// omission rules are testable without a server.
    #[must_use]
    pub fn text_parts(&self) -> Vec<(&'static str, String)> {
        let mut parts = Vec::new();
        if let Some(text) = &self.claim_text {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                parts.push(("claim_text", trimmed.to_string()));
            }
        }
        if let Some(claimed) = self.claimed_amount {
            parts.push(("claimed_amount", claimed.to_string()));
        }
        if let Some(estimated) = self.estimated_amount {
            parts.push(("estimated_amount", estimated.to_string()));
        }
        parts
    }

    fn into_form(self) -> reqwest::multipart::Form {
        let text_parts = self.text_parts();
        let file_part = reqwest::multipart::Part::bytes(self.bytes).file_name(self.filename);

        let mut form = reqwest::multipart::Form::new().part("file", file_part);
        for (name, value) in text_parts {
            form = form.text(name, value);
        }
        form
    }
}

/// JSON body for `/api/pipeline-from-text` (no document available).
#[derive(Serialize)]
struct PipelineTextRequest<'a> {
    claim_text: &'a str,
    claimed_amount: Option<i64>,
    estimated_amount: Option<i64>,
}

impl ApiClient {
    /// Run the full document pipeline at `/api/pipeline-from-pdf`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the server rejects the
    /// document, or the response cannot be parsed.
    pub async fn run_pipeline(
        &self,
        request: PipelineRequest,
        token: Option<&str>,
    ) -> Result<PipelineResult, ClientError> {
        self.post_multipart("/api/pipeline-from-pdf", request.into_form(), token)
            .await
    }

    /// Run normalization + fraud scoring without a document at
    /// `/api/pipeline-from-text`.
    ///
    /// The response omits `document_classification`, so it is returned as a
    /// raw JSON value rather than a [`PipelineResult`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the response cannot be
    /// parsed.
    pub async fn pipeline_from_text(
        &self,
        claim_text: &str,
        claimed_amount: Option<i64>,
        estimated_amount: Option<i64>,
        token: Option<&str>,
    ) -> Result<serde_json::Value, ClientError> {
        self.post_json(
            "/api/pipeline-from-text",
            &PipelineTextRequest {
                claim_text,
                claimed_amount,
                estimated_amount,
            },
            token,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn request() -> PipelineRequest {
        PipelineRequest {
            filename: "invoice_scan.pdf".into(),
            bytes: vec![0x25, 0x50, 0x44, 0x46],
            claim_text: None,
            claimed_amount: None,
            estimated_amount: None,
        }
    }

    #[test]
    fn amounts_without_text_omit_claim_text() {
        let req = PipelineRequest {
            claimed_amount: Some(5000),
            estimated_amount: Some(3000),
            ..request()
        };

        let parts = req.text_parts();
        assert_eq!(
            parts,
            vec![
                ("claimed_amount", "5000".to_string()),
                ("estimated_amount", "3000".to_string()),
            ]
        );
    }

    #[test]
    fn blank_text_is_not_attached() {
        let req = PipelineRequest {
            claim_text: Some("   \n".into()),
            ..request()
        };
        assert!(req.text_parts().is_empty());
    }

    #[test]
    fn present_text_is_trimmed_and_attached() {
        let req = PipelineRequest {
            claim_text: Some("  rear bumper damage after collision  ".into()),
            claimed_amount: Some(12000),
            ..request()
        };

        let parts = req.text_parts();
        assert_eq!(parts.len(), 2);
        assert_eq!(
            parts[0],
            ("claim_text", "rear bumper damage after collision".to_string())
        );
        assert_eq!(parts[1], ("claimed_amount", "12000".to_string()));
    }

    #[test]
    fn bare_file_sends_no_extra_parts() {
        assert!(request().text_parts().is_empty());
    }

    #[test]
    fn form_builds_from_request() {
        // Smoke test: form construction consumes the request without panicking.
        let req = PipelineRequest {
            claim_text: Some("text".into()),
            claimed_amount: Some(1),
            estimated_amount: Some(2),
            ..request()
        };
        let _form = req.into_form();
    }
}
