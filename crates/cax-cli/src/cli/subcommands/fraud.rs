use std::path::PathBuf;

use clap::Args;

#[derive(Clone, Debug, Args)]
pub struct FraudArgs {
    /// Claim description text.
    #[arg(long, conflicts_with = "text_file")]
    pub text: Option<String>,

    /// Read the claim description from a file instead.
    #[arg(long)]
    pub text_file: Option<PathBuf>,

    /// Amount claimed by the claimant.
    #[arg(long)]
    pub claimed: Option<i64>,

    /// Estimated repair amount.
    #[arg(long)]
    pub estimated: Option<i64>,
}
