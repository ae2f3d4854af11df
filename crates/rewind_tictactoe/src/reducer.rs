//! Pure reducers over the board history.
//!
//! Every reducer takes the current history by reference and returns a new
//! one. A refused transition returns a history equal to the input.

use super::contracts::{Contract, JumpContract, MoveContract};
use super::intent::Rejection;
use super::History;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How the jump reducer treats a ply past the end of the history.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum JumpPolicy {
    /// Leave the history unchanged.
    #[default]
    Ignore,
    /// Treat the ply as the latest one.
    Clamp,
}

/// Places the next player's mark in `cell`, or explains why not.
///
/// Refused when the latest board is already won, the index is off the board,
/// or the cell is occupied.
#[instrument(skip(history), fields(len = history.len()))]
pub fn try_apply_move(history: &History, cell: usize) -> Result<History, Rejection> {
    let pos = MoveContract::pre(history, &cell)?;
    let player = history.next_player();
    let next = history.pushed(history.latest().with_mark(pos, player));

    #[cfg(debug_assertions)]
    MoveContract::post(history, &next)?;

    debug!(%player, position = %pos, ply = next.current_ply(), "Move applied");
    Ok(next)
}

/// Places the next player's mark in `cell`.
///
/// Returns an unchanged copy of `history` when the move is refused.
#[instrument(skip(history), fields(len = history.len()))]
pub fn apply_move(history: &History, cell: usize) -> History {
    try_apply_move(history, cell).unwrap_or_else(|rejection| {
        debug!(%rejection, "Move ignored");
        history.clone()
    })
}

/// Rewinds to `ply`, keeping boards `0..=ply`, or explains why not.
#[instrument(skip(history), fields(len = history.len()))]
pub fn try_apply_jump(history: &History, ply: usize) -> Result<History, Rejection> {
    let ply = JumpContract::pre(history, &ply)?;
    let next = history.truncated(ply);

    #[cfg(debug_assertions)]
    JumpContract::post(history, &next)?;

    debug!(ply, "Jumped");
    Ok(next)
}

/// Rewinds to `ply` under `policy`.
#[instrument(skip(history), fields(len = history.len()))]
pub fn apply_jump_with(
    history: &History,
    ply: usize,
    policy: JumpPolicy,
) -> Result<History, Rejection> {
    let ply = match policy {
        JumpPolicy::Ignore => ply,
        JumpPolicy::Clamp => ply.min(history.current_ply()),
    };
    try_apply_jump(history, ply)
}

/// Rewinds to `ply`.
///
/// An out-of-range ply leaves the history unchanged.
#[instrument(skip(history), fields(len = history.len()))]
pub fn apply_jump(history: &History, ply: usize) -> History {
    try_apply_jump(history, ply).unwrap_or_else(|rejection| {
        debug!(%rejection, "Jump ignored");
        history.clone()
    })
}
