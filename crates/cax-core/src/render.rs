//! Pure presentation transforms.
//!
//! Maps typed API responses into presentation-ready view models. Nothing in
//! this module performs I/O; every function is a total transform so the CLI
//! output layer can print whatever comes back without error handling.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{ClassificationResult, FraudAssessment, NormalizedClaim, PipelineResult};
use crate::routing::{RoutingSuggestion, routing_suggestion};

// ---------------------------------------------------------------------------
// Tier
// ---------------------------------------------------------------------------

/// Presentation severity derived from a numeric or enumerated signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Success,
    Warning,
    Danger,
}

impl Tier {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tier for a classification confidence value.
///
/// Both thresholds are inclusive on the higher tier: exactly 0.8 is
/// `Success`, exactly 0.5 is `Warning`. Fixed policy constants, not
/// configurable per call.
#[must_use]
pub fn confidence_tier(confidence: f64) -> Tier {
    if confidence >= 0.8 {
        Tier::Success
    } else if confidence >= 0.5 {
        Tier::Warning
    } else {
        Tier::Danger
    }
}

/// Tier for a fraud risk level.
///
/// Direct string match: exactly `"High"` is `Danger`, exactly `"Medium"` is
/// `Warning`, and anything else — including `"Low"` and unrecognized level
/// strings — is `Success`.
#[must_use]
pub fn risk_tier(level: &str) -> Tier {
    match level {
        "High" => Tier::Danger,
        "Medium" => Tier::Warning,
        _ => Tier::Success,
    }
}

/// Derived document health score.
///
/// `round(confidence * 100 - 10 * quality_flag_count)`, clamped to `[0, 100]`
/// so out-of-range confidence inputs still yield a displayable value.
#[must_use]
pub fn health_score(confidence: f64, quality_flag_count: usize) -> u8 {
    #[allow(clippy::cast_precision_loss)]
    let raw = confidence * 100.0 - 10.0 * quality_flag_count as f64;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        raw.round().clamp(0.0, 100.0) as u8
    }
}

// ---------------------------------------------------------------------------
// View models
// ---------------------------------------------------------------------------

/// Presentation-ready classification result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationView {
    pub label: String,
    pub type_id: String,
    pub tier: Tier,
    /// Confidence as a whole-number percentage.
    pub confidence_pct: u8,
    pub reasoning: String,
    pub matched_keywords: Vec<String>,
    pub quality_flags: Vec<String>,
    pub health_score: u8,
    pub routing: RoutingSuggestion,
}

/// Presentation-ready fraud assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FraudView {
    pub risk_level: String,
    pub tier: Tier,
    /// Score as display text: whole numbers print without a decimal point.
    pub score_text: String,
    pub explanation: String,
    pub reasons: Vec<String>,
}

/// Presentation-ready normalized claim: verbatim JSON plus the one field the
/// chart layer consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedView {
    pub pretty_json: String,
    pub severity: Option<String>,
}

/// The three-region view produced from one atomic pipeline result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineView {
    pub document: ClassificationView,
    pub normalized: NormalizedView,
    pub fraud: FraudView,
}

#[must_use]
pub fn render_classification(result: &ClassificationResult) -> ClassificationView {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let confidence_pct = (result.confidence * 100.0).round().clamp(0.0, 100.0) as u8;

    ClassificationView {
        label: result.predicted_type_label.clone(),
        type_id: result.predicted_type.clone(),
        tier: confidence_tier(result.confidence),
        confidence_pct,
        reasoning: result.reasoning.clone(),
        matched_keywords: result.matched_keywords.clone(),
        quality_flags: result.quality_flags.clone(),
        health_score: health_score(result.confidence, result.quality_flags.len()),
        routing: routing_suggestion(&result.predicted_type),
    }
}

#[must_use]
pub fn render_fraud(assessment: &FraudAssessment) -> FraudView {
    FraudView {
        risk_level: assessment.fraud_risk_level.clone(),
        tier: risk_tier(&assessment.fraud_risk_level),
        score_text: format_score(assessment.fraud_score),
        explanation: assessment.explanation.clone(),
        reasons: assessment.reasons.clone(),
    }
}

#[must_use]
pub fn render_normalized(claim: &NormalizedClaim) -> NormalizedView {
    NormalizedView {
        pretty_json: claim.to_pretty_json(),
        severity: claim.severity().map(str::to_string),
    }
}

/// Render all three regions from one atomic pipeline result.
#[must_use]
pub fn render_pipeline(result: &PipelineResult) -> PipelineView {
    PipelineView {
        document: render_classification(&result.document_classification),
        normalized: render_normalized(&result.normalized_claim),
        fraud: render_fraud(&result.fraud_insights),
    }
}

fn format_score(score: f64) -> String {
    if score.is_finite() && score.fract() == 0.0 {
        format!("{score:.0}")
    } else {
        score.to_string()
    }
}
