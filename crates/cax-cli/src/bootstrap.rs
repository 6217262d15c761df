//! Startup wiring: configuration loading and client construction.

use cax_client::ApiClient;
use cax_config::CaxConfig;

/// Load layered configuration, falling back to defaults when loading fails.
///
/// A broken config file should not brick the CLI; the failure is logged and
/// the built-in defaults (local backend origin) are used instead.
pub fn load_config() -> CaxConfig {
    match CaxConfig::load_with_dotenv() {
        Ok(config) => config,
        Err(error) => {
            tracing::warn!(%error, "failed to load configuration; using defaults");
            CaxConfig::default()
        }
    }
}

/// Build the API client from configuration.
pub fn api_client(config: &CaxConfig) -> ApiClient {
    ApiClient::new(config.api.origin(), config.api.timeout_secs)
}

/// Bearer token of the current session, if one exists.
///
/// Used by the operations that accept anonymous use: the credential is
/// attached iff a session exists, never synthesized.
pub fn current_token() -> Option<String> {
    cax_auth::current().map(|session| session.access_token)
}
