use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    email: Option<String>,
    role: Option<String>,
    session_source: Option<String>,
    note: Option<String>,
}

pub async fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = match cax_auth::current() {
        Some(session) => AuthStatusResponse {
            authenticated: true,
            email: Some(session.identity.email),
            role: Some(session.identity.role),
            session_source: cax_auth::session_store::detect_session_source(),
            note: None,
        },
        None => AuthStatusResponse {
            authenticated: false,
            email: None,
            role: None,
            session_source: None,
            note: Some("no stored session — run `cax auth login`".into()),
        },
    };

    output(&status, flags.format)
}
