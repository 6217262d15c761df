//! # cax-auth
//!
//! Client-side session storage for the ClaimAxis CLI.
//!
//! Holds the opaque bearer credential and identity returned by the backend's
//! login endpoint. Storage tiers: OS keychain (`keyring`), env var override,
//! file fallback under `~/.claimaxis/`. Logging in and out against the server
//! lives in `cax-client`; this crate only persists what came back.

pub mod error;
pub mod session_store;

pub use error::AuthError;

use cax_core::Session;

/// Resolve the current session, if any.
///
/// Priority: keyring → env var → file.
#[must_use]
pub fn current() -> Option<Session> {
    session_store::load()
}

/// Resolve the current session or fail.
///
/// Operations on protected endpoints call this before touching the network,
/// so a missing session never produces a half-issued request.
///
/// # Errors
///
/// Returns `AuthError::NotAuthenticated` if no session is stored.
pub fn require() -> Result<Session, AuthError> {
    session_store::load().ok_or(AuthError::NotAuthenticated)
}

/// Clear the stored session.
///
/// # Errors
///
/// Returns `AuthError::SessionStoreError` if the credentials file cannot be
/// removed.
pub fn clear() -> Result<(), AuthError> {
    session_store::delete()
}

#[cfg(test)]
mod tests {
    use super::AuthError;

    #[test]
    fn not_authenticated_error_points_at_login() {
        assert_eq!(
            AuthError::NotAuthenticated.to_string(),
            "not authenticated — run `cax auth login`"
        );
    }
}
