//! Read-only snapshot handed to whatever displays the game.

use super::rules::detect_winner;
use super::{Cell, History, Player};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Logical phase of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    /// No winner yet; clicks on empty cells are accepted.
    InProgress {
        /// Player to move next.
        next: Player,
    },
    /// A line is complete; only history jumps are accepted.
    Concluded {
        /// Player holding the line.
        winner: Player,
    },
}

impl Phase {
    /// Derives the phase from a history.
    pub fn of(history: &History) -> Self {
        match detect_winner(history.latest()) {
            Some(winner) => Phase::Concluded { winner },
            None => Phase::InProgress {
                next: history.next_player(),
            },
        }
    }

    /// Returns the winner, if the game is concluded.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Phase::Concluded { winner } => Some(*winner),
            Phase::InProgress { .. } => None,
        }
    }

    /// Status line for this phase.
    pub fn status(&self) -> String {
        match self {
            Phase::Concluded { winner } => format!("Winner: {}", winner),
            Phase::InProgress { next } => format!("Next player: {}", next),
        }
    }
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct MoveEntry {
    /// Ply this entry rewinds to.
    pub ply: usize,
    /// Display label.
    pub label: String,
}

/// Label for the history entry at `ply`.
pub fn move_label(ply: usize) -> String {
    if ply == 0 {
        "Game start".to_string()
    } else {
        format!("Move #{}", ply)
    }
}

/// Snapshot of everything a display needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Latest board, row-major.
    pub board: [Cell; 9],
    /// Status line ("Winner: X" or "Next player: O").
    pub status: String,
    /// One entry per recorded ply, oldest first.
    pub moves: Vec<MoveEntry>,
    /// Logical phase.
    #[serde(flatten)]
    pub phase: Phase,
}

impl GameView {
    /// Builds the view of a history.
    #[instrument(skip(history), fields(len = history.len()))]
    pub fn of(history: &History) -> Self {
        let phase = Phase::of(history);
        Self {
            board: *history.latest().cells(),
            status: phase.status(),
            moves: (0..history.len())
                .map(|ply| MoveEntry::new(ply, move_label(ply)))
                .collect(),
            phase,
        }
    }
}
