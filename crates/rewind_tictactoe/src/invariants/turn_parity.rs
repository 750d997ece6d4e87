//! Turn parity invariant: X moves on even steps while the game is open.

use super::super::{Game, Phase, Player};
use super::Invariant;

/// Invariant: while playing, X is next iff `(history.len() - 1)` is even.
///
/// Not checked once the game is won: the winning move leaves the turn
/// indicator unflipped, and a jump to a won step sets it from parity alone.
pub struct TurnParityInvariant;

impl Invariant<Game> for TurnParityInvariant {
    fn holds(game: &Game) -> bool {
        if game.phase() != Phase::Playing {
            return true;
        }

        let moves_played = game.history().len() - 1;
        let expected = if moves_played % 2 == 0 {
            Player::X
        } else {
            Player::O
        };

        game.to_move() == expected
    }

    fn description() -> &'static str {
        "X is next iff an even number of moves has been played"
    }
}
