//! Rewind CLI - line-oriented front end for rewindable tic-tac-toe
//!
//! Reads commands (`click 4`, `jump 2`, `view`, `quit`) from stdin or a
//! script, feeds them through a single intent queue into a
//! [`rewind_tictactoe::GameController`], and writes each resulting view as
//! text or JSON.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod input;
mod render;
mod session;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError};
pub use input::{Command as InputCommand, InputError, parse_line};
pub use render::{OutputFormat, render};
pub use session::{EmitMode, Session};
