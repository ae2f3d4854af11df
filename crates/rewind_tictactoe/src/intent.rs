//! First-class intent types for the game controller.
//!
//! Intents are what a player asked for, not what happened. The controller
//! folds them one at a time; an intent that cannot be honored is ignored and
//! the reason is reported as a [`Rejection`].

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A user intent submitted to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Intent {
    /// A click on the cell at this index (0-8).
    #[display("click {_0}")]
    CellClick(usize),
    /// A click on the history entry for this ply.
    #[display("jump {_0}")]
    HistoryJump(usize),
}

/// Reason an intent left the history unchanged.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum Rejection {
    /// The cell index is not on the board.
    #[display("Cell {_0} is out of range (must be 0-8)")]
    CellOutOfRange(#[error(not(source))] usize),

    /// The cell is already marked.
    #[display("{_0} is already occupied")]
    CellOccupied(#[error(not(source))] Position),

    /// The latest board already has a winner.
    #[display("Game is already won by {_0}")]
    GameOver(#[error(not(source))] Player),

    /// The ply is not in the history.
    #[display("Ply {ply} is out of range (history has {len} boards)")]
    PlyOutOfRange {
        /// Requested ply.
        ply: usize,
        /// History length at the time of the request.
        len: usize,
    },

    /// A history invariant failed after the transition.
    #[display("Invariant violation: {_0}")]
    InvariantViolation(#[error(not(source))] String),
}

impl Rejection {
    /// True when the intent carried an argument the UI should never offer.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Rejection::CellOutOfRange(_) | Rejection::PlyOutOfRange { .. }
        )
    }
}
