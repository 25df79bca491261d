//! CLI module for PMP Experiment Stats
//!
//! Provides subcommands for running the engine in different modes:
//! - `serve`: HTTP API server
//! - `analyze`: one-shot analysis of a JSON sample file

pub mod analyze;
pub mod serve;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// PMP Experiment Stats - sequential A/B testing statistics engine
#[derive(Parser)]
#[command(name = "pmp-experiment-stats")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve(serve::ServeArgs),

    /// Analyze a JSON file of samples and print the report
    Analyze(analyze::AnalyzeArgs),
}

/// Load `.env` and the layered configuration, install logging, then reject
/// analysis settings the engine cannot honour
pub(crate) fn bootstrap() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    logging::init_logging(&config.logging);

    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_port() {
        let cli = Cli::try_parse_from(["pmp-experiment-stats", "serve", "--port", "9000"]).unwrap();

        match cli.command {
            Command::Serve(args) => assert_eq!(args.port, Some(9000)),
            Command::Analyze(_) => panic!("expected serve"),
        }
    }

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from([
            "pmp-experiment-stats",
            "analyze",
            "samples.json",
            "--alpha",
            "0.01",
            "--pretty",
        ])
        .unwrap();

        match cli.command {
            Command::Analyze(args) => {
                assert_eq!(args.file.to_str(), Some("samples.json"));
                assert_eq!(args.alpha, Some(0.01));
                assert!(args.max_samples.is_none());
                assert!(args.pretty);
            }
            Command::Serve(_) => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_analyze_requires_file() {
        assert!(Cli::try_parse_from(["pmp-experiment-stats", "analyze"]).is_err());
    }
}
