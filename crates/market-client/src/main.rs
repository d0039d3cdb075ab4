//! CLI entry point for the marketplace client.

use anyhow::Result;
use clap::Parser;

use market_client::cli::Cli;
use market_client::commands;
use market_client::config::ClientConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "debug".into()),
            )
            .init();
    }

    let mut config = ClientConfig::load(&cli.config)?;
    if let Some(node) = cli.node {
        config.node_addr = node;
    }

    commands::run(config, cli.command).await
}
