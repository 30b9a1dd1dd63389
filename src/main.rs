use anyhow::Result;
use clap::Parser;
use huffpress::cli::{run_cli, Cli};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = cli.log_filter().unwrap_or_else(|_| "huffpress=info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();

    run_cli(cli)
}
