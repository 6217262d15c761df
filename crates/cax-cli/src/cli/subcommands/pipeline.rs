use std::path::PathBuf;

use clap::Args;

#[derive(Clone, Debug, Args)]
pub struct PipelineArgs {
    /// PDF file(s) to run through the pipeline. Only the first is used;
    /// extras are ignored. With no file, --text runs the text-only pipeline.
    #[arg(required_unless_present_any = ["file", "text"])]
    pub files: Vec<PathBuf>,

    /// Explicit file selection (takes precedence over positional candidates).
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Free-text claim description. Accompanies the document when a file is
    /// given; drives the text-only pipeline otherwise.
    #[arg(long)]
    pub text: Option<String>,

    /// Amount claimed by the claimant.
    #[arg(long)]
    pub claimed: Option<i64>,

    /// Estimated repair amount.
    #[arg(long)]
    pub estimated: Option<i64>,
}
