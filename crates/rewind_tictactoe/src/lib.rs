//! Tic-tac-toe with a rewindable move history.
//!
//! This crate is the host-independent core of `rewind`. It owns all game
//! state and every rule; the web and terminal front ends only render what
//! it exposes and send [`Action`]s back.
//!
//! # Architecture
//!
//! - **Game**: single state owner holding the history of board snapshots,
//!   the turn indicator and the winner
//! - **Actions**: `Play` and `JumpTo`, applied through [`Game::dispatch`];
//!   illegal actions are ignored, never errors
//! - **Rules**: pure win detection over one snapshot
//! - **Invariants**: properties checked after every applied action in debug builds
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{Action, Game, Position, Status};
//!
//! let mut game = Game::new();
//! for pos in [Position::TopLeft, Position::MiddleLeft, Position::TopCenter,
//!             Position::Center, Position::TopRight] {
//!     game.dispatch(Action::Play(pos));
//! }
//! assert_eq!(game.status().to_string(), "Winner: X");
//!
//! game.dispatch(Action::JumpTo(2));
//! assert_eq!(game.history().len(), 3);
//! assert!(matches!(game.status(), Status::NextPlayer(_)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod view;

pub use action::{Action, Ignored, Transition};
pub use game::{Game, Phase};
pub use position::Position;
pub use types::{Board, Player, Square};
pub use view::{HistoryEntry, Status};
