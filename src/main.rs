// ABOUTME: Main entry point for the mingle CLI

use anyhow::Result;
use clap::Parser;

use mingle::cli::{self, Cli};

/// Env var holding the tracing filter, e.g. `MINGLE_LOG=mingle=debug`
const LOG_ENV: &str = "MINGLE_LOG";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging();

    cli::run(cli).await
}

fn setup_logging() {
    use tracing_subscriber::prelude::*;

    // stdout belongs to command output, diagnostics go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
                .unwrap_or_else(|_| "mingle=warn".into()),
        )
        .init();
}
