use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated — run `cax auth login`")]
    NotAuthenticated,

    #[error("session store error: {0}")]
    SessionStoreError(String),
}
