//! Command-line interface for rewind.

use crate::config::{AppConfig, ConfigError};
use crate::render::OutputFormat;
use clap::{Parser, Subcommand};
use rewind_tictactoe::JumpPolicy;
use std::path::PathBuf;
use tracing::instrument;

/// Rewind - tic-tac-toe with full move history
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with move history and rewind", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Out-of-range jump handling: ignore or clamp (overrides the config file)
    #[arg(long, global = true)]
    pub jump_policy: Option<JumpPolicy>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, one command per line on stdin
    Play,

    /// Replay a script of commands
    Replay {
        /// Script file, one command per line
        file: PathBuf,

        /// Print the view after every accepted intent, not just at the end
        #[arg(long)]
        trace: bool,
    },
}

impl Cli {
    /// Loads the config file, then applies command-line overrides.
    #[instrument(skip(self))]
    pub fn resolve_config(&self) -> Result<AppConfig, ConfigError> {
        let mut config = AppConfig::load(self.config.as_deref())?;
        if let Some(format) = self.format {
            config = config.with_format(format);
        }
        if let Some(jump_policy) = self.jump_policy {
            config = config.with_jump_policy(jump_policy);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay() {
        let cli = Cli::try_parse_from(["rewind", "replay", "game.txt", "--trace"]).unwrap();
        match cli.command {
            Command::Replay { file, trace } => {
                assert_eq!(file, PathBuf::from("game.txt"));
                assert!(trace);
            }
            Command::Play => panic!("Expected replay"),
        }
    }

    #[test]
    fn test_overrides_apply() {
        let cli = Cli::try_parse_from([
            "rewind",
            "play",
            "--format",
            "json",
            "--jump-policy",
            "clamp",
        ])
        .unwrap();
        let config = cli.resolve_config().unwrap();
        assert_eq!(*config.format(), OutputFormat::Json);
        assert_eq!(*config.jump_policy(), JumpPolicy::Clamp);
    }

    #[test]
    fn test_bad_jump_policy_rejected() {
        assert!(Cli::try_parse_from(["rewind", "play", "--jump-policy", "wrap"]).is_err());
    }
}
