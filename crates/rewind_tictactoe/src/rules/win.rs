//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position};
use tracing::instrument;

/// The eight winning lines, checked in this order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the player holding the first complete line in [`LINES`] order,
/// `None` if no line is complete.
#[instrument]
pub fn detect_winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| {
        let cell = board.get(a);
        if cell == board.get(b) && cell == board.get(c) {
            cell.player()
        } else {
            None
        }
    })
}
