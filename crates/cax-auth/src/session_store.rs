use std::fs;
use std::path::PathBuf;

use cax_core::{Identity, Session};

use crate::error::AuthError;

const DEFAULT_KEYRING_SERVICE: &str = "claimaxis-cli";
const KEYRING_USER: &str = "session";
const CREDENTIALS_FILE_NAME: &str = "credentials";

/// Returns the keyring service name.
///
/// Defaults to `"claimaxis-cli"`. Override via `CLAIMAXIS_KEYRING_SERVICE`
/// env var for testing (e.g., `"claimaxis-cli-test"`) to avoid touching
/// production credentials.
fn keyring_service() -> String {
    std::env::var("CLAIMAXIS_KEYRING_SERVICE")
        .unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string())
}

/// Store a session in the OS keychain. Falls back to file if keyring
/// unavailable.
///
/// # Errors
///
/// Returns `AuthError::SessionStoreError` if both keyring and file storage
/// fail, or if the session cannot be serialized.
pub fn store(session: &Session) -> Result<(), AuthError> {
    let payload = serde_json::to_string(session)
        .map_err(|e| AuthError::SessionStoreError(format!("serialize session: {e}")))?;

    match keyring::Entry::new(&keyring_service(), KEYRING_USER) {
        Ok(entry) => match entry.set_password(&payload) {
            Ok(()) => Ok(()),
            Err(error) => {
                tracing::warn!(%error, "keyring store failed; falling back to file");
                store_file(&payload)
            }
        },
        Err(error) => {
            tracing::warn!(%error, "keyring unavailable; falling back to file");
            store_file(&payload)
        }
    }
}

/// Load the current session. Priority: keyring → `CLAIMAXIS_AUTH__TOKEN` env
/// → file (`~/.claimaxis/credentials`).
///
/// The env tier carries only a bearer token, so its identity fields are
/// empty; authenticated calls work, `auth status` shows no user.
#[must_use]
pub fn load() -> Option<Session> {
    // 1. Keyring
    if let Ok(entry) = keyring::Entry::new(&keyring_service(), KEYRING_USER)
        && let Ok(payload) = entry.get_password()
        && let Some(session) = parse_session(&payload)
    {
        return Some(session);
    }

    // 2. Environment variable (token only)
    if let Ok(token) = std::env::var("CLAIMAXIS_AUTH__TOKEN") {
        if !token.is_empty() {
            return Some(Session {
                access_token: token,
                identity: Identity {
                    email: String::new(),
                    role: String::new(),
                },
            });
        }
    }

    // 3. File fallback
    load_file()
}

/// Delete the stored session from keyring and file.
///
/// # Errors
///
/// Returns `AuthError::SessionStoreError` if the credentials file cannot be
/// removed.
pub fn delete() -> Result<(), AuthError> {
    // Delete from keyring (ignore errors — may not exist)
    if let Ok(entry) = keyring::Entry::new(&keyring_service(), KEYRING_USER) {
        let _ = entry.delete_credential();
    }

    // Delete credentials file
    let path = credentials_path()?;
    if path.exists() {
        fs::remove_file(&path).map_err(|e| {
            AuthError::SessionStoreError(format!("failed to delete {}: {e}", path.display()))
        })?;
    }

    Ok(())
}

/// Detect which tier the current session came from (for status display).
#[must_use]
pub fn detect_session_source() -> Option<String> {
    if let Ok(entry) = keyring::Entry::new(&keyring_service(), KEYRING_USER)
        && entry
            .get_password()
            .is_ok_and(|p| parse_session(&p).is_some())
    {
        return Some("keyring".into());
    }
    if std::env::var("CLAIMAXIS_AUTH__TOKEN").is_ok_and(|t| !t.is_empty()) {
        return Some("env".into());
    }
    if load_file().is_some() {
        return Some("file".into());
    }
    None
}

// --- Private file helpers ---

fn parse_session(payload: &str) -> Option<Session> {
    serde_json::from_str::<Session>(payload)
        .ok()
        .filter(|s| !s.access_token.is_empty())
}

fn credentials_path() -> Result<PathBuf, AuthError> {
    dirs::home_dir()
        .map(|h| h.join(".claimaxis").join(CREDENTIALS_FILE_NAME))
        .ok_or_else(|| {
            AuthError::SessionStoreError(
                "home directory not found — cannot store credentials".into(),
            )
        })
}

fn store_file(payload: &str) -> Result<(), AuthError> {
    let path = credentials_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            AuthError::SessionStoreError(format!("mkdir {}: {e}", parent.display()))
        })?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
            }
        }
    }
    fs::write(&path, payload)
        .map_err(|e| AuthError::SessionStoreError(format!("write {}: {e}", path.display())))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o600))
            .map_err(|e| AuthError::SessionStoreError(format!("chmod {}: {e}", path.display())))?;
    }

    Ok(())
}

fn load_file() -> Option<Session> {
    let path = credentials_path().ok()?;
    let payload = fs::read_to_string(&path).ok()?;
    parse_session(&payload)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_session() -> Session {
        Session {
            access_token: "tok_abc123".into(),
            identity: Identity {
                email: "adjuster@example.com".into(),
                role: "adjuster".into(),
            },
        }
    }

    #[test]
    fn credentials_path_is_under_home() {
        let path = credentials_path().expect("should resolve");
        assert!(path.ends_with(".claimaxis/credentials"));
    }

    #[test]
    fn file_store_load_delete_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let creds_path = tmp.path().join("credentials");

        let payload = serde_json::to_string(&sample_session()).expect("serialize");
        std::fs::write(&creds_path, &payload).expect("write");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&creds_path, std::fs::Permissions::from_mode(0o600))
                .expect("chmod");
        }

        let content = std::fs::read_to_string(&creds_path).expect("read");
        let session = parse_session(&content).expect("parse");
        assert_eq!(session, sample_session());

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&creds_path)
                .expect("metadata")
                .permissions()
                .mode()
                & 0o777;
            assert_eq!(mode, 0o600, "credentials file should be 0600");
        }

        std::fs::remove_file(&creds_path).expect("delete");
        assert!(!creds_path.exists());
    }

    #[test]
    fn parse_session_rejects_empty_token() {
        let payload = r#"{"access_token": "", "email": "a@b.c", "role": "viewer"}"#;
        assert!(parse_session(payload).is_none());
    }

    #[test]
    fn parse_session_rejects_garbage() {
        assert!(parse_session("   \n  ").is_none());
        assert!(parse_session("not json").is_none());
    }
}
