use std::path::PathBuf;

use clap::Args;

#[derive(Clone, Debug, Args)]
pub struct NormalizeArgs {
    /// Claim notes to normalize.
    #[arg(long, conflicts_with = "text_file")]
    pub text: Option<String>,

    /// Read claim notes from a file instead.
    #[arg(long)]
    pub text_file: Option<PathBuf>,
}
