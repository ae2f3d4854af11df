//! Starting board invariant.

use super::super::{Board, History};
use super::Invariant;

/// Invariant: Ply 0 is the empty board.
pub struct StartsEmptyInvariant;

impl Invariant<History> for StartsEmptyInvariant {
    fn holds(history: &History) -> bool {
        history.board_at(0) == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts from the empty board"
    }
}
