//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. They hold no state, so the
//! game engine can re-run them against any snapshot in history.

pub mod win;

pub use win::{check_winner, LINES};
