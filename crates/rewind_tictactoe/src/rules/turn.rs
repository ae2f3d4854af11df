//! Turn derivation.

use super::super::{History, Player};
use tracing::instrument;

/// Returns the player to move next.
///
/// The turn is never stored: X moves when an even number of moves has been
/// made, O otherwise. After a rewind this is recomputed from the shorter
/// history.
#[instrument(skip(history), fields(len = history.len()))]
pub fn next_player(history: &History) -> Player {
    history.next_player()
}
