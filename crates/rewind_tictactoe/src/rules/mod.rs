//! Game rules for tic-tac-toe.
//!
//! Pure functions over boards and histories. Rules are kept apart from
//! storage so the reducers and the contracts can share them.

pub mod turn;
pub mod win;

pub use turn::next_player;
pub use win::{detect_winner, LINES};
