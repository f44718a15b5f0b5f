use anyhow::Context;
use clap::Parser;
use galactic_filter::cli::{run, Cli};
use tracing::Level;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.json {
        Level::WARN
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let input = cli.input.clone();
    run(cli).with_context(|| format!("Failed to process {}", input.display()))
}
