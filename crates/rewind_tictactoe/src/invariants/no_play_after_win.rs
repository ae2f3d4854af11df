//! Concluded games do not continue.

use super::super::{rules::detect_winner, History};
use super::Invariant;

/// Invariant: Only the latest board may have a winner.
///
/// Once a line is complete no further ply is recorded.
pub struct NoPlayAfterWinInvariant;

impl Invariant<History> for NoPlayAfterWinInvariant {
    fn holds(history: &History) -> bool {
        let earlier = &history.boards()[..history.len() - 1];
        earlier.iter().all(|board| detect_winner(board).is_none())
    }

    fn description() -> &'static str {
        "No ply follows a winning board"
    }
}
