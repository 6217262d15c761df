//! Fraud scoring endpoint.

use cax_core::FraudAssessment;
use serde::Serialize;

use crate::{ApiClient, ClientError};

/// JSON body for `/api/fraud-score`. The amounts are nullable on the wire;
/// the server treats explicit nulls and absent fields the same for this
/// endpoint, so absent amounts serialize as nulls.
#[derive(Serialize)]
struct FraudRequest<'a> {
    text: &'a str,
    claimed_amount: Option<i64>,
    estimated_amount: Option<i64>,
}

impl ApiClient {
    /// Score fraud risk for a claim description at `/api/fraud-score`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the response cannot be
    /// parsed.
    pub async fn fraud_score(
        &self,
        text: &str,
        claimed_amount: Option<i64>,
        estimated_amount: Option<i64>,
        token: Option<&str>,
    ) -> Result<FraudAssessment, ClientError> {
        self.post_json(
            "/api/fraud-score",
            &FraudRequest {
                text,
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

    #[test]
    fn absent_amounts_serialize_as_null() {
        let body = serde_json::to_value(FraudRequest {
            text: "minor scratch on bumper",
            claimed_amount: None,
            estimated_amount: None,
        })
        .unwrap();

        assert_eq!(body["text"], "minor scratch on bumper");
        assert!(body["claimed_amount"].is_null());
        assert!(body["estimated_amount"].is_null());
    }

    #[test]
    fn present_amounts_serialize_as_numbers() {
        let body = serde_json::to_value(FraudRequest {
            text: "engine damage",
            claimed_amount: Some(5000),
            estimated_amount: Some(3000),
        })
        .unwrap();

        assert_eq!(body["claimed_amount"], 5000);
        assert_eq!(body["estimated_amount"], 3000);
    }
}
