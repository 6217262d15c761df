use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::PipelineArgs;
use crate::output::output;
use crate::pipeline::{PipelineOptions, PipelineOrchestrator, PipelineState};
use crate::upload::UploadSlot;
use cax_config::CaxConfig;

pub async fn handle(
    args: &PipelineArgs,
    flags: &GlobalFlags,
    config: &CaxConfig,
) -> anyhow::Result<()> {
    // Text-only invocation skips the document pipeline entirely.
    if args.file.is_none() && args.files.is_empty() {
        return handle_from_text(args, flags, config).await;
    }

    let slot = UploadSlot::acquire(args.file.as_deref(), &args.files)?;

    let mut orchestrator = PipelineOrchestrator::new();
    orchestrator.select_file(slot)?;

    let client = bootstrap::api_client(config);
    let token = bootstrap::current_token();
    let options = PipelineOptions {
        claim_text: args.text.clone(),
        claimed_amount: args.claimed,
        estimated_amount: args.estimated,
    };

    let regions = orchestrator
        .run(&client, options, token.as_deref())
        .await?
        .clone();
    output(&regions, flags.format)?;

    if orchestrator.state() == PipelineState::Failed {
        anyhow::bail!("pipeline failed");
    }
    Ok(())
}

/// Normalization + fraud scoring without a document.
async fn handle_from_text(
    args: &PipelineArgs,
    flags: &GlobalFlags,
    config: &CaxConfig,
) -> anyhow::Result<()> {
    let text = crate::commands::resolve_text(args.text.as_deref(), None)?;

    let client = bootstrap::api_client(config);
    let token = bootstrap::current_token();
    let result = client
        .pipeline_from_text(&text, args.claimed, args.estimated, token.as_deref())
        .await?;

    output(&result, flags.format)
}
