//! Pipeline orchestration: select file → run → populate three regions.
//!
//! The backend performs the classify → normalize → score chaining in one
//! atomic call; this module owns the client-side state around it. Three
//! independently-rendered result regions (document, normalized claim, fraud)
//! must always agree: all processing, all populated from the one result, or
//! all failed with the same message. Partial results are never shown.
//!
//! ```text
//! idle → ready → running → succeeded
//!                        → failed
//! succeeded / failed → running (re-trigger) | ready (new file)
//! ```
//!
//! A new invocation while `running` is rejected — one in-flight pipeline
//! request at a time per orchestrator instance.

use std::fmt;

use serde::Serialize;

use cax_client::{ApiClient, PipelineRequest};
use cax_core::{
    ClassificationView, CoreError, FraudView, NormalizedView, PipelineResult, render_pipeline,
};

use crate::upload::UploadSlot;

// ---------------------------------------------------------------------------
// State machine
// ---------------------------------------------------------------------------

/// Lifecycle of one orchestrator invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineState {
    Idle,
    Ready,
    Running,
    Succeeded,
    Failed,
}

impl PipelineState {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Idle => &[Self::Ready],
            Self::Ready => &[Self::Running, Self::Ready],
            Self::Running => &[Self::Succeeded, Self::Failed],
            Self::Succeeded | Self::Failed => &[Self::Running, Self::Ready],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Ready => "ready",
            Self::Running => "running",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Regions
// ---------------------------------------------------------------------------

/// Display state of one result region.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum Region<T> {
    Empty,
    Processing,
    Populated(T),
    Failed(String),
}

/// The three pipeline result regions, kept consistent as a unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineRegions {
    pub document: Region<ClassificationView>,
    pub normalized: Region<NormalizedView>,
    pub fraud: Region<FraudView>,
}

impl PipelineRegions {
    const fn empty() -> Self {
        Self {
            document: Region::Empty,
            normalized: Region::Empty,
            fraud: Region::Empty,
        }
    }

    fn processing(&mut self) {
        self.document = Region::Processing;
        self.normalized = Region::Processing;
        self.fraud = Region::Processing;
    }
}

// ---------------------------------------------------------------------------
// Orchestrator
// ---------------------------------------------------------------------------

/// Optional fields accompanying the uploaded document.
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    pub claim_text: Option<String>,
    pub claimed_amount: Option<i64>,
    pub estimated_amount: Option<i64>,
}

/// Drives the combined upload → classify → normalize → score flow and keeps
/// the three result regions consistent across success and failure.
#[derive(Debug)]
pub struct PipelineOrchestrator {
    state: PipelineState,
    slot: Option<UploadSlot>,
    regions: PipelineRegions,
}

impl Default for PipelineOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineOrchestrator {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: PipelineState::Idle,
            slot: None,
            regions: PipelineRegions::empty(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> PipelineState {
        self.state
    }

    #[must_use]
    pub const fn regions(&self) -> &PipelineRegions {
        &self.regions
    }

    /// Occupy the slot. Replacing a previous selection discards it silently.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTransition` while a request is in flight.
    pub fn select_file(&mut self, slot: UploadSlot) -> Result<(), CoreError> {
        if self.state == PipelineState::Running {
            return Err(self.transition_error(PipelineState::Ready));
        }
        self.slot = Some(slot);
        self.state = PipelineState::Ready;
        Ok(())
    }

    /// Run the pipeline once.
    ///
    /// Pre-flight checks (reentrancy, slot occupancy, file readability) fail
    /// with an error before any request is issued. Transport failures do not
    /// return an error: they are converted into the uniform `Failed` region
    /// state, mirroring how success populates all three regions at once.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidTransition` if already running, or
    /// `CoreError::Validation` when no file is selected or it cannot be read.
    pub async fn run(
        &mut self,
        client: &ApiClient,
        options: PipelineOptions,
        token: Option<&str>,
    ) -> Result<&PipelineRegions, CoreError> {
        if self.state == PipelineState::Running {
            return Err(self.transition_error(PipelineState::Running));
        }

        let slot = self
            .slot
            .as_ref()
            .ok_or_else(|| CoreError::Validation("please select a PDF file first".into()))?;
        let bytes = slot.read_bytes()?;
        let filename = slot.filename().to_string();

        // Placeholders are written synchronously before the suspension point,
        // so an observer always sees "processing" before any response lands.
        self.state = PipelineState::Running;
        self.regions.processing();

        let request = PipelineRequest {
            filename,
            bytes,
            claim_text: options.claim_text,
            claimed_amount: options.claimed_amount,
            estimated_amount: options.estimated_amount,
        };

        match client.run_pipeline(request, token).await {
            Ok(result) => self.apply_success(&result),
            Err(error) => self.apply_failure(&error.to_string()),
        }

        Ok(&self.regions)
    }

    fn apply_success(&mut self, result: &PipelineResult) {
        let view = render_pipeline(result);
        self.regions.document = Region::Populated(view.document);
        self.regions.normalized = Region::Populated(view.normalized);
        self.regions.fraud = Region::Populated(view.fraud);
        self.state = PipelineState::Succeeded;
    }

    /// The response is atomic, so every region shows the same error and any
    /// prior successful content is cleared.
    fn apply_failure(&mut self, message: &str) {
        self.regions.document = Region::Failed(message.to_string());
        self.regions.normalized = Region::Failed(message.to_string());
        self.regions.fraud = Region::Failed(message.to_string());
        self.state = PipelineState::Failed;
    }

    fn transition_error(&self, to: PipelineState) -> CoreError {
        CoreError::InvalidTransition {
            entity: "pipeline".into(),
            from: self.state.to_string(),
            to: to.to_string(),
        }
    }
}
