mod cli;
mod application;
mod domain;
mod data;
mod ml;
mod infra;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    // Logs go to stderr so `--format json` output stays clean on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("store_zeror=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli.run()
}
