use std::path::PathBuf;

use clap::{Args, ValueEnum};

/// Which chart endpoint to hit.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ChartKindArg {
    Document,
    Normalize,
    Fraud,
}

#[derive(Clone, Debug, Args)]
pub struct ChartArgs {
    /// Chart variant.
    pub kind: ChartKindArg,

    /// Confidence percentage (document chart).
    #[arg(long)]
    pub confidence: Option<u8>,

    /// Document health score (document chart).
    #[arg(long)]
    pub health: Option<u8>,

    /// Claim severity annotation (normalize chart).
    #[arg(long)]
    pub severity: Option<String>,

    /// Fraud score (fraud chart).
    #[arg(long)]
    pub score: Option<String>,

    /// Fraud risk level (fraud chart).
    #[arg(long)]
    pub level: Option<String>,

    /// Where to write the image.
    #[arg(long, default_value = "chart.png")]
    pub out: PathBuf,
}
