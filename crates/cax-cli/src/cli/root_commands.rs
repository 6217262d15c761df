use clap::Subcommand;

use super::subcommands::{
    ChartArgs, ClassifyArgs, FraudArgs, NormalizeArgs, PipelineArgs, auth::AuthCommands,
};

/// All top-level `cax` commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log in, log out, or inspect the current session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Classify one PDF document.
    Classify(ClassifyArgs),
    /// Normalize free-form claim notes into a structured claim.
    Normalize(NormalizeArgs),
    /// Score fraud risk for a claim description.
    Fraud(FraudArgs),
    /// Run the full classify → normalize → score pipeline on a PDF.
    Pipeline(PipelineArgs),
    /// Download a chart image for a previous result.
    Chart(ChartArgs),
}
