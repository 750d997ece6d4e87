//! Snapshot count invariant: snapshot k holds exactly k marks.

use super::super::Game;
use super::Invariant;

/// Invariant: `history[k]` has exactly `k` occupied squares.
///
/// Index 0 is the empty board, and each move adds one snapshot with one
/// more mark. Jumps only ever cut the tail, so this survives time travel.
pub struct SnapshotCountInvariant;

impl Invariant<Game> for SnapshotCountInvariant {
    fn holds(game: &Game) -> bool {
        game.history()
            .iter()
            .enumerate()
            .all(|(step, board)| board.occupied() == step)
    }

    fn description() -> &'static str {
        "Snapshot k holds exactly k marks"
    }
}
