//! Rewind Tic-Tac-Toe - pure game state with move history
//!
//! The game is a history of board snapshots, one per ply, starting from the
//! empty board. Reducers produce a new history from the current one and an
//! intent; the [`GameController`] folds intents in arrival order and exposes
//! a read-only [`GameView`].
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Cell`], [`Board`], [`Position`]
//! - **History**: [`History`], never empty, replaced wholesale
//! - **Rules**: [`detect_winner`], [`next_player`]
//! - **Reducers**: [`apply_move`], [`apply_jump`] and their `try_` forms
//! - **Contracts & invariants**: checked after every move in debug builds
//! - **Controller**: [`GameController`], [`Intent`], [`Outcome`]
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameController, Player};
//!
//! let mut game = GameController::new();
//! for cell in [0, 1, 3, 4, 6] {
//!     game.submit_cell_click(cell);
//! }
//! assert_eq!(game.winner(), Some(Player::X));
//! assert_eq!(game.current_view().status, "Winner: X");
//!
//! game.submit_history_jump(1);
//! assert_eq!(game.current_view().status, "Next player: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod controller;
mod history;
mod intent;
mod invariants;
mod position;
mod reducer;
mod rules;
mod types;
mod view;

pub use contracts::{CellInRange, CellIsEmpty, Contract, GameNotOver, JumpContract, MoveContract};
pub use controller::{GameController, Outcome};
pub use history::{History, HistoryError};
pub use intent::{Intent, Rejection};
pub use invariants::{
    AlternatingMarksInvariant, HistoryInvariants, Invariant, InvariantSet, InvariantViolation,
    NoPlayAfterWinInvariant, SingleMarkPerPlyInvariant, StartsEmptyInvariant, check_history,
};
pub use position::Position;
pub use reducer::{JumpPolicy, apply_jump, apply_jump_with, apply_move, try_apply_jump, try_apply_move};
pub use rules::{LINES, detect_winner, next_player};
pub use types::{Board, Cell, Player};
pub use view::{GameView, MoveEntry, Phase, move_label};
