use clap::Parser;
use pmp_experiment_stats::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve(args) => cli::serve::run(args).await,
        Command::Analyze(args) => cli::analyze::run(args),
    }
}
