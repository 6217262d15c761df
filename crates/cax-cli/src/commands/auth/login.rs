use serde::Serialize;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::output::output;
use cax_config::CaxConfig;

#[derive(Serialize)]
struct AuthLoginResponse {
    authenticated: bool,
    email: String,
    role: String,
}

pub async fn handle(
    args: &AuthLoginArgs,
    flags: &GlobalFlags,
    config: &CaxConfig,
) -> anyhow::Result<()> {
    let client = bootstrap::api_client(config);
    let session = client.login(&args.email, &args.password).await?;
    cax_auth::session_store::store(&session)?;

    output(
        &AuthLoginResponse {
            authenticated: true,
            email: session.identity.email,
            role: session.identity.role,
        },
        flags.format,
    )
}
