//! Visual State Sharer - Entry Point
//!
//! Loads configuration, installs logging, then runs one subcommand.
//! Results go to stdout, one URL per line; logs go to stderr.

use anyhow::Context;
use clap::Parser;
use vss::cli::{Cli, execute, load_config};
use vss::infrastructure::ClientFactory;
use vss::infrastructure::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_logging(&config.logging)?;

    let factory = ClientFactory::new(&config).context("Failed to build API clients")?;
    execute(cli.command, &factory, &mut std::io::stdout()).await
}
