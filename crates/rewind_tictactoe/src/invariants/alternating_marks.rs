//! Alternating marks invariant: X, O, X, O, ...

use super::super::{Board, History, Player};
use super::Invariant;

/// Invariant: Odd plies add an X, even plies add an O.
///
/// Checked through mark counts rather than cell diffs.
pub struct AlternatingMarksInvariant;

fn mover_at(ply: usize) -> Player {
    if ply % 2 == 1 { Player::X } else { Player::O }
}

impl Invariant<History> for AlternatingMarksInvariant {
    fn holds(history: &History) -> bool {
        let count = |board: &Board, player| board.count_of(player);
        history
            .boards()
            .windows(2)
            .enumerate()
            .all(|(i, pair)| {
                let mover = mover_at(i + 1);
                let waiting = mover.opponent();
                count(&pair[1], mover) == count(&pair[0], mover) + 1
                    && count(&pair[1], waiting) == count(&pair[0], waiting)
            })
    }

    fn description() -> &'static str {
        "Players alternate marks (X, O, X, O, ...)"
    }
}
