//! First-class actions for the game reducer.
//!
//! Every state change goes through [`Game::dispatch`](crate::Game::dispatch)
//! with one of these values. Actions that break a precondition are not
//! errors: they are ignored, and the reason is handed back so hosts can log it.

use super::{Player, Position};
use derive_more::Display;

/// Something a player asked the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Action {
    /// Write the active mark at a position.
    #[display("play {}", _0)]
    Play(Position),
    /// Rewind to a history step, discarding every later snapshot.
    #[display("jump to step {}", _0)]
    JumpTo(usize),
}

/// Why an action left the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Ignored {
    /// The square already holds a mark.
    #[display("square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game already has a winner.
    #[display("game is already won by {}", _0)]
    GameOver(Player),

    /// The requested step is not in history.
    #[display("step {} is outside history of length {}", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

/// Result of dispatching an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The game state changed.
    Applied,
    /// The action was a no-op.
    Ignored(Ignored),
}

impl Transition {
    /// Returns true if the action changed the game.
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied)
    }
}
