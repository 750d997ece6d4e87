//! Winner consistency invariant: the stored winner matches the board.

use super::super::rules::check_winner;
use super::super::Game;
use super::Invariant;

/// Invariant: the winner field agrees with the win rule on the latest snapshot.
pub struct WinnerConsistentInvariant;

impl Invariant<Game> for WinnerConsistentInvariant {
    fn holds(game: &Game) -> bool {
        game.winner() == check_winner(game.current())
    }

    fn description() -> &'static str {
        "Winner matches the latest snapshot"
    }
}
