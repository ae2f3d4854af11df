//! Contract-based validation for history transitions.
//!
//! Contracts define correctness through preconditions and postconditions,
//! Hoare style: {P} transition {Q}.

use super::intent::Rejection;
use super::invariants::check_history;
use super::rules::detect_winner;
use super::{History, Position};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for a transition.
///
/// - Precondition: {P(state, action)} must hold before applying the action
/// - Postcondition: {Q(before, after)} must hold after applying it
pub trait Contract<S, A> {
    /// What a successful precondition check yields for the transition.
    type Checked;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Checked, Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Rejection>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The cell index names a board position.
pub struct CellInRange;

impl CellInRange {
    /// Resolves the index to a position.
    #[instrument]
    pub fn check(cell: usize) -> Result<Position, Rejection> {
        Position::from_index(cell).ok_or(Rejection::CellOutOfRange(cell))
    }
}

/// Precondition: The latest board has no winner.
pub struct GameNotOver;

impl GameNotOver {
    /// Checks the latest board.
    #[instrument(skip(history))]
    pub fn check(history: &History) -> Result<(), Rejection> {
        match detect_winner(history.latest()) {
            Some(winner) => Err(Rejection::GameOver(winner)),
            None => Ok(()),
        }
    }
}

/// Precondition: The target cell is empty on the latest board.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Checks the cell on the latest board.
    #[instrument(skip(history))]
    pub fn check(history: &History, pos: Position) -> Result<(), Rejection> {
        if history.latest().is_empty(pos) {
            Ok(())
        } else {
            Err(Rejection::CellOccupied(pos))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark.
///
/// Preconditions:
/// - Game is not already won
/// - Cell index is on the board
/// - Cell is empty
///
/// Postconditions:
/// - Exactly one board was appended
/// - All history invariants hold
pub struct MoveContract;

impl Contract<History, usize> for MoveContract {
    type Checked = Position;

    fn pre(history: &History, cell: &usize) -> Result<Position, Rejection> {
        GameNotOver::check(history)?;
        let pos = CellInRange::check(*cell)?;
        CellIsEmpty::check(history, pos)?;
        Ok(pos)
    }

    fn post(before: &History, after: &History) -> Result<(), Rejection> {
        if after.len() != before.len() + 1 || after.boards()[..before.len()] != *before.boards() {
            warn!(before = before.len(), after = after.len(), "Move did not append one board");
            return Err(Rejection::InvariantViolation(
                "Postcondition failed: move must append exactly one board".to_string(),
            ));
        }
        check_history_invariants(after)
    }
}

// ─────────────────────────────────────────────────────────────
//  Jump Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for rewinding to an earlier ply.
///
/// Preconditions:
/// - Ply is recorded in the history
///
/// Postconditions:
/// - Result is a prefix of the original history
pub struct JumpContract;

impl Contract<History, usize> for JumpContract {
    type Checked = usize;

    fn pre(history: &History, ply: &usize) -> Result<usize, Rejection> {
        if *ply < history.len() {
            Ok(*ply)
        } else {
            Err(Rejection::PlyOutOfRange {
                ply: *ply,
                len: history.len(),
            })
        }
    }

    fn post(before: &History, after: &History) -> Result<(), Rejection> {
        if before.boards().starts_with(after.boards()) {
            Ok(())
        } else {
            Err(Rejection::InvariantViolation(
                "Postcondition failed: jump must keep a prefix".to_string(),
            ))
        }
    }
}

fn check_history_invariants(history: &History) -> Result<(), Rejection> {
    check_history(history).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%descriptions, "History invariants violated");
        Rejection::InvariantViolation(format!("Postcondition failed: {}", descriptions))
    })
}
