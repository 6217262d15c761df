//! Response models for the claim-intelligence API.
//!
//! Every struct here maps 1:1 onto the server's JSON. Optional sequences
//! (`matched_keywords`, `quality_flags`, `reasons`) use `#[serde(default)]`
//! so an absent field decodes as an empty list rather than a parse error.
//! All values are transient: replaced wholesale on each new operation, never
//! incrementally mutated.

use serde::{Deserialize, Serialize};

/// Identity of the logged-in user, returned by `/auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
    pub role: String,
}

/// A client-held session: the opaque bearer credential plus the identity it
/// was issued for. Created on login, read by every authenticated call,
/// destroyed on logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(flatten)]
    pub identity: Identity,
}

/// Result of classifying one uploaded document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Machine identifier, e.g. `claim_form`, `invoice`.
    pub predicted_type: String,
    /// Human-readable label, e.g. "Claim Form".
    pub predicted_type_label: String,
    /// Classifier confidence in `[0, 1]`.
    pub confidence: f64,
    /// Explanation of why the classifier chose this type.
    pub reasoning: String,
    #[serde(default)]
    pub matched_keywords: Vec<String>,
    #[serde(default)]
    pub quality_flags: Vec<String>,
    /// First portion of the extracted document text, when the server includes it.
    #[serde(default)]
    pub raw_text_excerpt: Option<String>,
}

/// Structured claim produced by the normalizer.
///
/// The server's schema is open-ended, so the body is carried verbatim for
/// display. The one field the client consumes is `severity`, used when
/// requesting chart annotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedClaim(pub serde_json::Value);

impl NormalizedClaim {
    /// The normalizer's severity rating, when present.
    #[must_use]
    pub fn severity(&self) -> Option<&str> {
        self.0.get("severity").and_then(serde_json::Value::as_str)
    }

    /// Pretty-printed JSON for display, matching the server's field order.
    #[must_use]
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_default()
    }
}

/// Fraud risk assessment for one claim description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudAssessment {
    pub fraud_score: f64,
    /// One of "Low", "Medium", "High" per the server contract. Carried as a
    /// string because the rendering policy matches on the exact text.
    pub fraud_risk_level: String,
    pub explanation: String,
    #[serde(default)]
    pub reasons: Vec<String>,
}

/// Atomic result of the combined classify → normalize → score pipeline.
///
/// The server performs the chaining, so this arrives as a single unit; it is
/// never assembled client-side from independently-failing calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineResult {
    pub document_classification: ClassificationResult,
    pub normalized_claim: NormalizedClaim,
    pub fraud_insights: FraudAssessment,
    #[serde(default)]
    pub source_text_excerpt: Option<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const CLASSIFICATION_FIXTURE: &str = r#"{
        "predicted_type": "invoice",
        "predicted_type_label": "Invoice",
        "confidence": 0.62,
        "reasoning": "Classified as Invoice because it contains 5 characteristic phrase(s).",
        "matched_keywords": ["invoice", "amount due", "bill to", "gst", "total amount"],
        "quality_flags": ["No policy identifier field detected."]
    }"#;

    #[test]
    fn classification_parses_full_response() {
        let result: ClassificationResult = serde_json::from_str(CLASSIFICATION_FIXTURE).unwrap();
        assert_eq!(result.predicted_type, "invoice");
        assert_eq!(result.predicted_type_label, "Invoice");
        assert_eq!(result.matched_keywords.len(), 5);
        assert_eq!(result.quality_flags.len(), 1);
        assert!(result.raw_text_excerpt.is_none());
    }

    #[test]
    fn classification_defaults_missing_sequences_to_empty() {
        let result: ClassificationResult = serde_json::from_str(
            r#"{
                "predicted_type": "other",
                "predicted_type_label": "Other / Unclassified",
                "confidence": 0.0,
                "reasoning": "No strong document-type patterns were detected."
            }"#,
        )
        .unwrap();
        assert!(result.matched_keywords.is_empty());
        assert!(result.quality_flags.is_empty());
    }

    #[test]
    fn fraud_defaults_missing_reasons_to_empty() {
        let result: FraudAssessment = serde_json::from_str(
            r#"{
                "fraud_score": 0,
                "fraud_risk_level": "Low",
                "explanation": "No obvious red flags found in text."
            }"#,
        )
        .unwrap();
        assert!(result.reasons.is_empty());
        assert_eq!(result.fraud_risk_level, "Low");
    }

    #[test]
    fn normalized_claim_exposes_severity() {
        let claim: NormalizedClaim = serde_json::from_str(
            r#"{"loss_type": "Accident", "severity": "Medium", "affected_asset": "Motor Vehicle"}"#,
        )
        .unwrap();
        assert_eq!(claim.severity(), Some("Medium"));
    }

    #[test]
    fn normalized_claim_without_severity_is_none() {
        let claim: NormalizedClaim = serde_json::from_str(r#"{"loss_type": "Fire"}"#).unwrap();
        assert_eq!(claim.severity(), None);
    }

    #[test]
    fn session_flattens_identity() {
        let session: Session = serde_json::from_str(
            r#"{"access_token": "tok_abc", "email": "adjuster@example.com", "role": "adjuster"}"#,
        )
        .unwrap();
        assert_eq!(session.access_token, "tok_abc");
        assert_eq!(session.identity.email, "adjuster@example.com");
        assert_eq!(session.identity.role, "adjuster");

        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["email"], "adjuster@example.com");
        assert!(json.get("identity").is_none());
    }

    #[test]
    fn pipeline_result_parses_as_one_unit() {
        let result: PipelineResult = serde_json::from_str(
            r#"{
                "document_classification": {
                    "predicted_type": "claim_form",
                    "predicted_type_label": "Claim Form",
                    "confidence": 0.88,
                    "reasoning": "Contains characteristic claim form phrases."
                },
                "normalized_claim": {"loss_type": "Theft", "severity": "High"},
                "fraud_insights": {
                    "fraud_score": 4,
                    "fraud_risk_level": "High",
                    "explanation": "Overall fraud risk scored as High based on 2 signals."
                },
                "source_text_excerpt": "Claim form for stolen vehicle..."
            }"#,
        )
        .unwrap();
        assert_eq!(result.document_classification.predicted_type, "claim_form");
        assert_eq!(result.normalized_claim.severity(), Some("High"));
        assert_eq!(result.fraud_insights.fraud_risk_level, "High");
        assert!(result.source_text_excerpt.is_some());
    }
}
