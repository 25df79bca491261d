//! Analyze command - one-shot analysis of a sample file
//!
//! Reads `{"variant_a": [...], "variant_b": [...]}` from a file (or `-` for
//! stdin) and prints the full experiment report as JSON on stdout.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::api::types::ExperimentSamplesRequest;
use crate::domain::experiment::ExperimentReport;
use crate::infrastructure::services::{AnalysisOverrides, ExperimentAnalysisService};

/// Arguments for the analyze command
#[derive(Args, Clone, Debug)]
pub struct AnalyzeArgs {
    /// JSON file with `variant_a` and `variant_b` arrays, or `-` for stdin
    pub file: PathBuf,

    /// Significance level (overrides the file and config)
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Per-variant sample cap for the stopping rules (overrides the file and config)
    #[arg(long)]
    pub max_samples: Option<usize>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pub pretty: bool,
}

impl AnalyzeArgs {
    fn overrides(&self, input: &ExperimentSamplesRequest) -> AnalysisOverrides {
        let from_file = input.overrides();

        AnalysisOverrides {
            alpha: self.alpha.or(from_file.alpha),
            max_samples_per_variant: self.max_samples.or(from_file.max_samples_per_variant),
            ..from_file
        }
    }
}

/// Run the analyze command
pub fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    let config = super::bootstrap()?;
    let service = ExperimentAnalysisService::new(config.analysis);

    let raw = read_input(&args.file)?;
    let output = analyze_str(&service, &raw, &args)?;

    println!("{}", output);

    Ok(())
}

/// Parse samples, run the analysis and render the report
pub fn analyze_str(
    service: &ExperimentAnalysisService,
    raw: &str,
    args: &AnalyzeArgs,
) -> anyhow::Result<String> {
    let input: ExperimentSamplesRequest =
        serde_json::from_str(raw).context("Input is not a valid samples document")?;

    let report = service.analyze(input.samples(), args.overrides(&input))?;

    info!(
        n_a = input.variant_a.len(),
        n_b = input.variant_b.len(),
        winner = %report.verdict.winner,
        "Analysis complete"
    );

    render(&report, args.pretty)
}

fn render(report: &ExperimentReport, pretty: bool) -> anyhow::Result<String> {
    let output = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };

    Ok(output)
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read samples from stdin")?;
        return Ok(buffer);
    }

    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read samples from {}", path.display()))
}
