//! Monotonic history invariant: snapshots only ever gain one mark.

use super::super::{Game, Player, Square};
use super::Invariant;

/// Invariant: each snapshot is its predecessor plus one alternating mark.
///
/// Marks already written never change. The mark added at step `k` is X
/// when `k` is odd and O when `k` is even.
pub struct MonotonicHistoryInvariant;

impl Invariant<Game> for MonotonicHistoryInvariant {
    fn holds(game: &Game) -> bool {
        game.history()
            .windows(2)
            .enumerate()
            .all(|(idx, pair)| {
                let expected = if idx % 2 == 0 { Player::X } else { Player::O };
                let mut added = pair[0]
                    .squares()
                    .iter()
                    .zip(pair[1].squares())
                    .filter(|(before, after)| before != after);

                match (added.next(), added.next()) {
                    (Some((Square::Empty, after)), None) => *after == Square::Occupied(expected),
                    _ => false,
                }
            })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one alternating mark to the previous one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(MonotonicHistoryInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_after_moves_holds() {
        let mut game = Game::new();
        game.play(Position::TopLeft);
        game.play(Position::Center);
        game.play(Position::BottomRight);
        assert!(MonotonicHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_mark_violates() {
        let mut game = Game::new();
        game.play(Position::Center);
        let overwritten = Board::new().with_mark(Position::Center, Player::O);
        game.history.push(overwritten);
        assert!(!MonotonicHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_same_mark_twice_violates() {
        let mut game = Game::new();
        game.play(Position::Center);
        let twice = game.current().with_mark(Position::TopLeft, Player::X);
        game.history.push(twice);
        assert!(!MonotonicHistoryInvariant::holds(&game));
    }
}
