use serde::Serialize;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::{ChartArgs, ChartKindArg};
use crate::output::output;
use cax_client::ApiClient;
use cax_config::CaxConfig;

#[derive(Serialize)]
struct ChartResponse {
    url: String,
    saved_to: String,
    bytes: usize,
}

pub async fn handle(
    args: &ChartArgs,
    flags: &GlobalFlags,
    config: &CaxConfig,
) -> anyhow::Result<()> {
    let client = bootstrap::api_client(config);
    let url = build_url(&client, args)?;

    let bytes = client.fetch_chart(&url).await?;
    let out = resolve_out_path(config, args);
    std::fs::write(&out, &bytes)
        .map_err(|error| anyhow::anyhow!("cannot write {}: {error}", out.display()))?;

    output(
        &ChartResponse {
            url,
            saved_to: out.display().to_string(),
            bytes: bytes.len(),
        },
        flags.format,
    )
}

fn build_url(client: &ApiClient, args: &ChartArgs) -> anyhow::Result<String> {
    match args.kind {
        ChartKindArg::Document => {
            let (Some(confidence), Some(health)) = (args.confidence, args.health) else {
                anyhow::bail!("chart document requires --confidence and --health");
            };
            Ok(client.document_chart_url(confidence, health))
        }
        ChartKindArg::Normalize => {
            let Some(severity) = args.severity.as_deref() else {
                anyhow::bail!("chart normalize requires --severity");
            };
            Ok(client.normalize_chart_url(severity))
        }
        ChartKindArg::Fraud => {
            let (Some(score), Some(level)) = (args.score.as_deref(), args.level.as_deref()) else {
                anyhow::bail!("chart fraud requires --score and --level");
            };
            Ok(client.fraud_chart_url(score, level))
        }
    }
}

/// A relative `--out` lands under the configured chart directory when one is
/// set; absolute paths are taken as-is.
fn resolve_out_path(config: &CaxConfig, args: &ChartArgs) -> std::path::PathBuf {
    if args.out.is_absolute() || config.general.chart_dir.is_empty() {
        return args.out.clone();
    }
    std::path::Path::new(&config.general.chart_dir).join(&args.out)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::cli::subcommands::{ChartArgs, ChartKindArg};

    fn chart_args(kind: ChartKindArg) -> ChartArgs {
        ChartArgs {
            kind,
            confidence: None,
            health: None,
            severity: None,
            score: None,
            level: None,
            out: PathBuf::from("chart.png"),
        }
    }

    #[test]
    fn document_chart_requires_both_params() {
        let client = ApiClient::new("http://localhost:8000", 30);
        let mut args = chart_args(ChartKindArg::Document);
        args.confidence = Some(88);

        let err = build_url(&client, &args).expect_err("health missing");
        assert!(err.to_string().contains("--confidence and --health"));
    }

    #[test]
    fn fraud_chart_url_carries_score_and_level() {
        let client = ApiClient::new("http://localhost:8000", 30);
        let mut args = chart_args(ChartKindArg::Fraud);
        args.score = Some("62".into());
        args.level = Some("Medium".into());

        let url = build_url(&client, &args).expect("url");
        assert_eq!(
            url,
            "http://localhost:8000/api/chart/fraud?score=62&level=Medium"
        );
    }

    #[test]
    fn relative_out_path_lands_under_chart_dir() {
        let mut config = CaxConfig::default();
        config.general.chart_dir = "/tmp/charts".into();
        let args = chart_args(ChartKindArg::Normalize);

        assert_eq!(
            resolve_out_path(&config, &args),
            PathBuf::from("/tmp/charts/chart.png")
        );
    }
}
