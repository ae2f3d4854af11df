//! Rewind - play or replay tic-tac-toe with move history.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use rewind_cli::{AppConfig, Cli, Command, EmitMode, Session};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries views.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli.resolve_config()?;

    match cli.command {
        Command::Play => run_play(config).await,
        Command::Replay { file, trace } => run_replay(config, file, trace).await,
    }
}

/// Plays interactively on stdin.
#[instrument(skip(config))]
async fn run_play(config: AppConfig) -> Result<()> {
    info!("Starting interactive game");
    let session = Session::new(
        config,
        EmitMode::EveryChange,
        tokio::io::stdout(),
        tokio::io::stderr(),
    );
    session
        .run_blocking(std::io::BufReader::new(std::io::stdin()))
        .await?;
    Ok(())
}

/// Replays a script file.
#[instrument(skip(config), fields(file = %file.display()))]
async fn run_replay(config: AppConfig, file: PathBuf, trace: bool) -> Result<()> {
    info!("Replaying script");
    let script = tokio::fs::File::open(&file)
        .await
        .with_context(|| format!("Failed to open script {}", file.display()))?;

    let emit = if trace {
        EmitMode::EveryChange
    } else {
        EmitMode::FinalOnly
    };
    let session = Session::new(config, emit, tokio::io::stdout(), tokio::io::stderr());
    session.run(script).await?;
    Ok(())
}
