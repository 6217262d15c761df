use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::NormalizeArgs;
use crate::commands::resolve_text;
use crate::output::output;
use cax_config::CaxConfig;
use cax_core::render_normalized;

pub async fn handle(
    args: &NormalizeArgs,
    flags: &GlobalFlags,
    config: &CaxConfig,
) -> anyhow::Result<()> {
    let text = resolve_text(args.text.as_deref(), args.text_file.as_deref())?;

    let client = bootstrap::api_client(config);
    let token = bootstrap::current_token();
    let claim = client.normalize_claim(&text, token.as_deref()).await?;

    output(&render_normalized(&claim), flags.format)
}
