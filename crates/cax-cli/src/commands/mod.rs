use std::path::Path;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use cax_config::CaxConfig;

pub mod auth;
pub mod chart;
pub mod classify;
pub mod fraud;
pub mod normalize;
pub mod pipeline;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    flags: &GlobalFlags,
    config: &CaxConfig,
) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => auth::handle(&action, flags, config).await,
        Commands::Classify(args) => classify::handle(&args, flags, config).await,
        Commands::Normalize(args) => normalize::handle(&args, flags, config).await,
        Commands::Fraud(args) => fraud::handle(&args, flags, config).await,
        Commands::Pipeline(args) => pipeline::handle(&args, flags, config).await,
        Commands::Chart(args) => chart::handle(&args, flags, config).await,
    }
}

/// Resolve claim text from an inline flag or a file, rejecting blank input
/// before any request is made.
pub(crate) fn resolve_text(
    inline: Option<&str>,
    file: Option<&Path>,
) -> anyhow::Result<String> {
    let text = match (inline, file) {
        (Some(text), _) => text.to_string(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .map_err(|error| anyhow::anyhow!("cannot read {}: {error}", path.display()))?,
        (None, None) => anyhow::bail!("provide claim text via --text or --text-file"),
    };

    if text.trim().is_empty() {
        anyhow::bail!("claim text must not be empty");
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::resolve_text;

    #[test]
    fn inline_text_wins_over_file() {
        let text = resolve_text(Some("rear bumper dent"), Some(std::path::Path::new("x.txt")))
            .expect("inline text");
        assert_eq!(text, "rear bumper dent");
    }

    #[test]
    fn blank_inline_text_is_rejected() {
        let err = resolve_text(Some("   \n"), None).expect_err("blank");
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn missing_both_sources_is_rejected() {
        let err = resolve_text(None, None).expect_err("no source");
        assert!(err.to_string().contains("--text or --text-file"));
    }

    #[test]
    fn text_file_is_read() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("notes.txt");
        std::fs::write(&path, "hail damage to roof").expect("write");

        let text = resolve_text(None, Some(&path)).expect("file text");
        assert_eq!(text, "hail damage to roof");
    }
}
