use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::ClassifyArgs;
use crate::output::output;
use crate::upload::UploadSlot;
use cax_config::CaxConfig;
use cax_core::render_classification;

pub async fn handle(
    args: &ClassifyArgs,
    flags: &GlobalFlags,
    config: &CaxConfig,
) -> anyhow::Result<()> {
    let slot = UploadSlot::acquire(args.file.as_deref(), &args.files)?;
    let bytes = slot.read_bytes()?;

    let client = bootstrap::api_client(config);
    let token = bootstrap::current_token();
    let result = client
        .classify_document(slot.filename(), bytes, token.as_deref())
        .await?;

    output(&render_classification(&result), flags.format)
}
