//! Game controller: folds intents into the board history.

use super::intent::{Intent, Rejection};
use super::reducer::{JumpPolicy, apply_jump_with, try_apply_move};
use super::view::{GameView, Phase};
use super::{Board, History, Player};
use tracing::{debug, instrument, warn};

/// What the controller did with an intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The history was replaced.
    Accepted,
    /// The history is unchanged.
    Ignored(Rejection),
}

impl Outcome {
    /// True if the intent changed the history.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted)
    }

    /// The reason the intent was ignored, if it was.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Outcome::Accepted => None,
            Outcome::Ignored(rejection) => Some(rejection),
        }
    }
}

/// Owns the board history and applies intents to it one at a time.
///
/// The history is the only state. Each accepted intent swaps in a new
/// history produced by a reducer; nothing is patched in place.
#[derive(Debug, Clone, Default)]
pub struct GameController {
    history: History,
    jump_policy: JumpPolicy,
}

impl GameController {
    /// Creates a controller holding only the empty starting board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a controller with a specific out-of-range jump policy.
    #[instrument]
    pub fn with_jump_policy(jump_policy: JumpPolicy) -> Self {
        Self {
            history: History::new(),
            jump_policy,
        }
    }

    /// Builds a controller by folding `intents` from a fresh game.
    #[instrument(skip(intents))]
    pub fn replay(jump_policy: JumpPolicy, intents: impl IntoIterator<Item = Intent>) -> Self {
        let mut controller = Self::with_jump_policy(jump_policy);
        for intent in intents {
            controller.submit(intent);
        }
        controller
    }

    /// Applies one intent.
    #[instrument(skip(self), fields(ply = self.history.current_ply()))]
    pub fn submit(&mut self, intent: Intent) -> Outcome {
        let next = match intent {
            Intent::CellClick(cell) => try_apply_move(&self.history, cell),
            Intent::HistoryJump(ply) => apply_jump_with(&self.history, ply, self.jump_policy),
        };

        match next {
            Ok(history) => {
                self.history = history;
                debug!(
                    %intent,
                    ply = self.history.current_ply(),
                    status = %self.status(),
                    "Intent accepted"
                );
                Outcome::Accepted
            }
            Err(rejection) => {
                if rejection.is_invalid_argument() {
                    warn!(%intent, %rejection, "Invalid intent ignored");
                } else {
                    debug!(%intent, %rejection, "Intent ignored");
                }
                Outcome::Ignored(rejection)
            }
        }
    }

    /// Handles a click on cell `index` (0-8).
    pub fn submit_cell_click(&mut self, index: usize) -> Outcome {
        self.submit(Intent::CellClick(index))
    }

    /// Handles a click on the history entry for `ply`.
    pub fn submit_history_jump(&mut self, ply: usize) -> Outcome {
        self.submit(Intent::HistoryJump(ply))
    }

    /// Snapshot for display.
    pub fn current_view(&self) -> GameView {
        GameView::of(&self.history)
    }

    /// The full history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The latest board.
    pub fn latest_board(&self) -> &Board {
        self.history.latest()
    }

    /// Player to move next.
    pub fn next_player(&self) -> Player {
        self.history.next_player()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        Phase::of(&self.history)
    }

    /// Winner on the latest board, if any.
    pub fn winner(&self) -> Option<Player> {
        self.phase().winner()
    }

    /// Status line for the latest board.
    pub fn status(&self) -> String {
        self.phase().status()
    }

    /// Out-of-range jump policy in effect.
    pub fn jump_policy(&self) -> JumpPolicy {
        self.jump_policy
    }
}
