//! Monotonic fill invariant: each ply adds exactly one mark.

use super::super::{Cell, History};
use super::Invariant;

/// Invariant: Each board differs from the previous one in exactly one cell,
/// which went from empty to occupied.
///
/// Together with the empty start this means marks are never overwritten or
/// erased along a history.
pub struct SingleMarkPerPlyInvariant;

impl Invariant<History> for SingleMarkPerPlyInvariant {
    fn holds(history: &History) -> bool {
        history.boards().windows(2).all(|pair| {
            let mut changed = pair[0]
                .cells()
                .iter()
                .zip(pair[1].cells())
                .filter(|(before, after)| before != after);

            matches!(
                (changed.next(), changed.next()),
                (Some((Cell::Empty, Cell::Occupied(_))), None)
            )
        })
    }

    fn description() -> &'static str {
        "Each ply adds exactly one mark to an empty cell"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{apply_move, Board, Player, Position};

    #[test]
    fn test_reducer_history_holds() {
        let history = [4, 0, 8, 2]
            .into_iter()
            .fold(History::new(), |h, cell| apply_move(&h, cell));
        assert!(SingleMarkPerPlyInvariant::holds(&history));
    }

    #[test]
    fn test_unchanged_ply_violates() {
        let history = History::from_boards_unchecked(vec![Board::new(), Board::new()]);
        assert!(!SingleMarkPerPlyInvariant::holds(&history));
    }

    #[test]
    fn test_overwritten_mark_violates() {
        let first = Board::new().with_mark(Position::Center, Player::X);
        let second = first.with_mark(Position::Center, Player::O);
        let history = History::from_boards_unchecked(vec![Board::new(), first, second]);
        assert!(!SingleMarkPerPlyInvariant::holds(&history));
    }
}
