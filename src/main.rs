//! Chronogen: main entry point

use chronogen::cli::{self, Cli};
use chronogen::error::Result;
use clap::Parser;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    cli::run(cli)
}
