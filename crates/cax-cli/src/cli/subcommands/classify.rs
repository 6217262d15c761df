use std::path::PathBuf;

use clap::Args;

#[derive(Clone, Debug, Args)]
pub struct ClassifyArgs {
    /// PDF file(s) to classify. Only the first is used; extras are ignored.
    #[arg(required_unless_present = "file")]
    pub files: Vec<PathBuf>,

    /// Explicit file selection (takes precedence over positional candidates).
    #[arg(long)]
    pub file: Option<PathBuf>,
}
