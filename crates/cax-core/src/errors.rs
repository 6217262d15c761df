//! Cross-cutting error types for the ClaimAxis client.
//!
//! Transport and credential-store errors are defined in their respective
//! crates (`cax-client`, `cax-auth`); this module only holds the errors that
//! can originate anywhere in the system.

use thiserror::Error;

/// Errors that can be raised by any ClaimAxis crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input failed a local pre-flight check (no file, empty text, bad
    /// extension). Surfaced to the user before any network call is made.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity} from {from} to {to}")]
    InvalidTransition {
        entity: String,
        from: String,
        to: String,
    },
}
