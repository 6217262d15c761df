use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::FraudArgs;
use crate::commands::resolve_text;
use crate::output::output;
use cax_config::CaxConfig;
use cax_core::render_fraud;

pub async fn handle(
    args: &FraudArgs,
    flags: &GlobalFlags,
    config: &CaxConfig,
) -> anyhow::Result<()> {
    let text = resolve_text(args.text.as_deref(), args.text_file.as_deref())?;

    let client = bootstrap::api_client(config);
    let token = bootstrap::current_token();
    let assessment = client
        .fraud_score(&text, args.claimed, args.estimated, token.as_deref())
        .await?;

    output(&render_fraud(&assessment), flags.format)
}
