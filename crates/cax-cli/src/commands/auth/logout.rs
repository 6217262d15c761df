use serde::Serialize;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::output::output;
use cax_config::CaxConfig;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
}

/// Log out: notify the server on a best-effort basis, then clear the local
/// session. A dead backend never traps a user in a logged-in state, but a
/// missing session is an error rather than a silent no-op.
pub async fn handle(flags: &GlobalFlags, config: &CaxConfig) -> anyhow::Result<()> {
    let session = cax_auth::require()?;

    let client = bootstrap::api_client(config);
    if let Err(error) = client.logout(&session.access_token).await {
        tracing::warn!(%error, "server logout failed; clearing local session anyway");
    }

    cax_auth::clear()?;
    output(&AuthLogoutResponse { cleared: true }, flags.format)
}
