mod cli;
mod commands;
mod config;
mod error;
mod output;
mod seed;
mod state;
mod storage;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::commands::{execute, Printer};
use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env().with_database(cli.database.clone());

    // Logs go to stderr so command output on stdout stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let state = AppState::new(&config).await?;
    let printer = Printer {
        format: cli.format,
        quiet: cli.quiet,
    };

    if let Some(output) = execute(cli.command, state.repo(), printer).await? {
        println!("{output}");
    }

    Ok(())
}
