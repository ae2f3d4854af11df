//! Board history: one snapshot per ply, starting from the empty board.

use super::invariants::check_history;
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// Ordered sequence of board snapshots from game start to the current ply.
///
/// Element 0 is always the empty board, so a history is never empty.
/// Histories are only ever extended by one board or cut back to a prefix,
/// both of which produce a new value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Board>", into = "Vec<Board>")]
pub struct History {
    boards: Vec<Board>,
}

impl History {
    /// Creates a history holding only the empty starting board.
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
        }
    }

    /// Returns all snapshots in ply order.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Returns the board at `ply`, if recorded.
    pub fn board_at(&self, ply: usize) -> Option<&Board> {
        self.boards.get(ply)
    }

    /// Returns the most recent board.
    pub fn latest(&self) -> &Board {
        // Non-empty by construction.
        &self.boards[self.boards.len() - 1]
    }

    /// Number of snapshots, including the starting board.
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Always false; present for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of moves made so far.
    pub fn moves_made(&self) -> usize {
        self.boards.len() - 1
    }

    /// Index of the latest ply.
    pub fn current_ply(&self) -> usize {
        self.moves_made()
    }

    /// Player to move next. X moves first.
    pub fn next_player(&self) -> Player {
        if self.boards.len() % 2 == 1 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Returns a new history with `board` appended.
    pub(crate) fn pushed(&self, board: Board) -> Self {
        let mut boards = Vec::with_capacity(self.boards.len() + 1);
        boards.extend_from_slice(&self.boards);
        boards.push(board);
        Self { boards }
    }

    /// Wraps boards without checking any invariant.
    #[cfg(test)]
    pub(crate) fn from_boards_unchecked(boards: Vec<Board>) -> Self {
        Self { boards }
    }

    /// Returns the prefix ending at `ply` (inclusive).
    ///
    /// `ply` must be a recorded ply.
    pub(crate) fn truncated(&self, ply: usize) -> Self {
        Self {
            boards: self.boards[..=ply].to_vec(),
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

/// Error converting raw boards into a history.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum HistoryError {
    /// No boards were supplied.
    #[display("History must contain the starting board")]
    Empty,
    /// The first board is not the empty board.
    #[display("History must start from the empty board")]
    NonEmptyStart,
    /// The boards could not have been produced by play.
    #[display("History is not a legal game: {_0}")]
    Invariant(#[error(not(source))] String),
}

impl TryFrom<Vec<Board>> for History {
    type Error = HistoryError;

    fn try_from(boards: Vec<Board>) -> Result<Self, Self::Error> {
        match boards.first() {
            None => Err(HistoryError::Empty),
            Some(first) if *first != Board::new() => Err(HistoryError::NonEmptyStart),
            Some(_) => {
                let history = Self { boards };
                check_history(&history).map_err(|violations| {
                    let descriptions = violations
                        .iter()
                        .map(|v| v.description.as_str())
                        .collect::<Vec<_>>()
                        .join("; ");
                    HistoryError::Invariant(descriptions)
                })?;
                Ok(history)
            }
        }
    }
}

impl From<History> for Vec<Board> {
    fn from(history: History) -> Self {
        history.boards
    }
}
