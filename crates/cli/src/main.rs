//! Command-line front end for the task & category manager
//!
//! Each invocation loads the snapshots from the data directory, runs one
//! command through the controller, and prints the result.

mod cli;
mod commands;
mod config;
mod state;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::config::AppConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo=info,todo_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<todo_core::Error>() {
            // Rejected input: tell the user, nothing was changed
            Some(todo_core::Error::InvalidInput(_) | todo_core::Error::CategoryInUse { .. }) => {
                eprintln!("{:#}", err);
                ExitCode::from(1)
            }
            _ => {
                eprintln!("Error: {:#}", err);
                ExitCode::from(2)
            }
        },
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = AppConfig::from_env();
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    tracing::debug!("Using data directory: {:?}", config.data_dir);

    let mut controller = state::open_controller(&config)
        .await
        .with_context(|| format!("Failed to open {}", config.data_dir.display()))?;

    let report = commands::execute(&mut controller, cli.command).await?;

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.to_text());
    }
    Ok(())
}
