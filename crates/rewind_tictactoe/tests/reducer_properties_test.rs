//! Property-based tests for the reducers.

use proptest::prelude::*;
use rewind_tictactoe::{
    Board, History, Intent, LINES, Player, apply_jump, apply_move, check_history, detect_winner,
    next_player, try_apply_move,
};

// =============================================================================
// Strategies
// =============================================================================

/// Any sequence of cell clicks, legal or not (indices past 8 included).
fn arb_clicks() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..12, 0..20)
}

/// A mix of clicks and jumps.
fn arb_intents() -> impl Strategy<Value = Vec<Intent>> {
    prop::collection::vec(
        prop_oneof![
            (0usize..10).prop_map(Intent::CellClick),
            (0usize..12).prop_map(Intent::HistoryJump),
        ],
        0..30,
    )
}

fn play(clicks: &[usize]) -> History {
    clicks
        .iter()
        .fold(History::new(), |history, &cell| apply_move(&history, cell))
}

fn fold(intents: &[Intent]) -> History {
    intents.iter().fold(History::new(), |history, intent| match *intent {
        Intent::CellClick(cell) => apply_move(&history, cell),
        Intent::HistoryJump(ply) => apply_jump(&history, ply),
    })
}

fn winners_on(board: &Board) -> Vec<Player> {
    let mut winners: Vec<Player> = LINES
        .iter()
        .filter_map(|&[a, b, c]| {
            let cell = board.get(a);
            (cell == board.get(b) && cell == board.get(c))
                .then(|| cell.player())
                .flatten()
        })
        .collect();
    winners.dedup();
    winners
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_reachable_histories_keep_invariants(intents in arb_intents()) {
        let history = fold(&intents);
        prop_assert!(check_history(&history).is_ok());
    }

    #[test]
    fn prop_winner_only_with_complete_line(clicks in arb_clicks()) {
        let history = play(&clicks);
        for board in history.boards() {
            let winners = winners_on(board);
            prop_assert!(winners.len() <= 1, "two winners on {:?}", board);
            prop_assert_eq!(detect_winner(board), winners.first().copied());
        }
    }

    #[test]
    fn prop_refused_move_is_unchanged(clicks in arb_clicks(), cell in 0usize..12) {
        let history = play(&clicks);
        if try_apply_move(&history, cell).is_err() {
            prop_assert_eq!(apply_move(&history, cell), history.clone());
        }
        // Clicking an occupied cell never changes anything.
        for (index, existing) in history.latest().cells().iter().enumerate() {
            if !existing.is_empty() {
                prop_assert_eq!(apply_move(&history, index), history.clone());
            }
        }
    }

    #[test]
    fn prop_turn_alternates(clicks in arb_clicks()) {
        let history = play(&clicks);
        for ply in 0..history.len() {
            let prefix = apply_jump(&history, ply);
            let expected = if ply % 2 == 0 { Player::X } else { Player::O };
            prop_assert_eq!(next_player(&prefix), expected);
        }
    }

    #[test]
    fn prop_jump_is_idempotent(clicks in arb_clicks(), ply in 0usize..10) {
        let history = play(&clicks);
        prop_assume!(ply < history.len());
        let once = apply_jump(&history, ply);
        let twice = apply_jump(&once, ply);
        prop_assert_eq!(once.len(), ply + 1);
        prop_assert_eq!(&twice, &once);
        prop_assert_eq!(once.boards(), &history.boards()[..=ply]);
    }
}
