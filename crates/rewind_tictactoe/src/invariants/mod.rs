//! First-class invariants over the board history.
//!
//! Invariants are logical properties every history produced by the reducers
//! must satisfy. They are testable on their own and are checked as move
//! postconditions in debug builds.

use super::History;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants; every member is checked and all
/// violations are reported, not just the first.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod alternating_marks;
pub mod no_play_after_win;
pub mod single_mark_per_ply;
pub mod starts_empty;

pub use alternating_marks::AlternatingMarksInvariant;
pub use no_play_after_win::NoPlayAfterWinInvariant;
pub use single_mark_per_ply::SingleMarkPerPlyInvariant;
pub use starts_empty::StartsEmptyInvariant;

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    StartsEmptyInvariant,
    SingleMarkPerPlyInvariant,
    AlternatingMarksInvariant,
    NoPlayAfterWinInvariant,
);

/// Checks every history invariant.
pub fn check_history(history: &History) -> Result<(), Vec<InvariantViolation>> {
    HistoryInvariants::check_all(history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{apply_move, Board, Player, Position};

    fn corrupt(boards: Vec<Board>) -> History {
        History::from_boards_unchecked(boards)
    }

    #[test]
    fn test_invariant_set_holds_for_new_history() {
        assert!(check_history(&History::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let history = [0, 4, 8]
            .into_iter()
            .fold(History::new(), |h, cell| apply_move(&h, cell));
        assert!(check_history(&history).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        // O moves first and places two marks at once.
        let bad = Board::new()
            .with_mark(Position::TopLeft, Player::O)
            .with_mark(Position::Center, Player::O);
        let violations = check_history(&corrupt(vec![Board::new(), bad])).unwrap_err();

        assert_eq!(violations.len(), 2);
        assert!(
            violations
                .iter()
                .any(|v| v.description == SingleMarkPerPlyInvariant::description())
        );
        assert!(
            violations
                .iter()
                .any(|v| v.description == AlternatingMarksInvariant::description())
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (StartsEmptyInvariant, SingleMarkPerPlyInvariant);
        assert!(TwoInvariants::check_all(&History::new()).is_ok());
    }
}
