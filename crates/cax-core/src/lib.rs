//! # cax-core
//!
//! Core types and pure rendering logic for the ClaimAxis client.
//!
//! This crate provides the foundational pieces shared across all client crates:
//! - Response models for the claim-intelligence API (classification,
//!   normalization, fraud assessment, combined pipeline)
//! - The session/identity types held by the credential store
//! - Pure presentation transforms: severity tiers, document health score,
//!   routing suggestions, and the view models the CLI prints
//! - Cross-cutting error types

pub mod errors;
pub mod models;
pub mod render;
pub mod routing;

pub use errors::CoreError;
pub use models::{
    ClassificationResult, FraudAssessment, Identity, NormalizedClaim, PipelineResult, Session,
};
pub use render::{
    ClassificationView, FraudView, NormalizedView, PipelineView, Tier, confidence_tier,
    health_score, render_classification, render_fraud, render_normalized, render_pipeline,
    risk_tier,
};
pub use routing::{RoutingSuggestion, routing_suggestion};
