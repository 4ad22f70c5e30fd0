//! `papercheck` binary: compare two documents and write their similarity score.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("papercheck=debug,info")
    } else {
        EnvFilter::new("papercheck=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    cli::run(&cli)
}
