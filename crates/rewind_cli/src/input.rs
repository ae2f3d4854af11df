//! Parsing of text commands into intents.

use rewind_tictactoe::{Intent, Position};
use tracing::instrument;

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Forward an intent to the controller.
    Intent(Intent),
    /// Print the current view again.
    View,
    /// End the session.
    Quit,
}

/// Error parsing an input line.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InputError {
    /// The first word is not a command, a cell index, or a position label.
    #[display("Unknown command: {_0}")]
    UnknownCommand(#[error(not(source))] String),

    /// A command was given without its argument.
    #[display("'{_0}' needs an argument")]
    MissingArgument(#[error(not(source))] &'static str),

    /// The cell argument is neither a number nor a position label.
    #[display("Not a cell: {_0}")]
    InvalidCell(#[error(not(source))] String),

    /// The ply argument is not a number.
    #[display("Not a ply number: {_0}")]
    InvalidPly(#[error(not(source))] String),
}

/// Parses one line of input.
///
/// Returns `Ok(None)` for blank lines and `#` comments.
///
/// ```text
/// click 4        c center       4        top-left
/// jump 2         j 0
/// view           quit
/// ```
#[instrument]
pub fn parse_line(line: &str) -> Result<Option<Command>, InputError> {
    let line = line.split('#').next().unwrap_or_default().trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "click" | "c" => Command::Intent(Intent::CellClick(parse_cell(required(rest, "click")?)?)),
        "jump" | "j" => Command::Intent(Intent::HistoryJump(parse_ply(required(rest, "jump")?)?)),
        "view" | "v" => Command::View,
        "quit" | "q" | "exit" => Command::Quit,
        _ => match parse_cell(line) {
            Ok(cell) => Command::Intent(Intent::CellClick(cell)),
            Err(_) => return Err(InputError::UnknownCommand(word.to_string())),
        },
    };

    Ok(Some(command))
}

fn required<'a>(arg: &'a str, command: &'static str) -> Result<&'a str, InputError> {
    if arg.is_empty() {
        Err(InputError::MissingArgument(command))
    } else {
        Ok(arg)
    }
}

/// Numbers pass through unchecked so the controller sees out-of-range cells.
/// A number too large for `usize` is an input error, not a cell index.
fn parse_cell(arg: &str) -> Result<usize, InputError> {
    if let Ok(index) = arg.parse::<usize>() {
        return Ok(index);
    }
    Position::from_label_or_number(arg)
        .map(Position::to_index)
        .ok_or_else(|| InputError::InvalidCell(arg.to_string()))
}

fn parse_ply(arg: &str) -> Result<usize, InputError> {
    arg.parse::<usize>()
        .map_err(|_| InputError::InvalidPly(arg.to_string()))
}
