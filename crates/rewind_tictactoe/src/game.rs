//! The game state owner: history, turn indicator and winner.

use super::action::{Action, Ignored, Transition};
use super::invariants::assert_invariants;
use super::rules::check_winner;
use super::{Board, Player, Position};
use tracing::{debug, info, instrument};

/// Phase of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Moves are accepted.
    Playing,
    /// A line was completed; only a jump can resume play.
    Won(Player),
}

/// Tic-tac-toe game with a rewindable history of board snapshots.
///
/// This is the single source of truth for a game. Hosts render from the
/// read-only accessors and feed user input back through [`Game::dispatch`].
///
/// On a winning move the turn indicator is left where it was, so
/// [`Game::to_move`] still names the winner. [`Game::status`] looks at the
/// winner first and never shows that stale value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) history: Vec<Board>,
    pub(crate) to_move: Player,
    pub(crate) winner: Option<Player>,
}

impl Game {
    /// Creates a new game: one empty snapshot, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            to_move: Player::X,
            winner: None,
        }
    }

    /// All snapshots, oldest first. Index 0 is the empty board.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// The latest snapshot.
    pub fn current(&self) -> &Board {
        // history always holds the initial snapshot
        &self.history[self.history.len() - 1]
    }

    /// The mark that plays next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Turn indicator as a boolean: true when X plays next.
    pub fn x_is_next(&self) -> bool {
        self.to_move == Player::X
    }

    /// The winner, if a line has been completed.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        match self.winner {
            Some(player) => Phase::Won(player),
            None => Phase::Playing,
        }
    }

    /// Applies an action. Ignored actions leave the game unchanged.
    #[instrument(skip(self, action), fields(action = %action))]
    pub fn dispatch(&mut self, action: Action) -> Transition {
        let transition = match action {
            Action::Play(pos) => self.play(pos),
            Action::JumpTo(step) => self.jump_to(step),
        };

        if let Transition::Ignored(reason) = transition {
            debug!(%reason, "Action ignored");
        }

        transition
    }

    /// Writes the active mark at `pos`.
    ///
    /// A no-op when the game is already won or the square is taken.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, pos: Position) -> Transition {
        if let Some(winner) = self.winner {
            return Transition::Ignored(Ignored::GameOver(winner));
        }

        let current = self.current();
        if !current.is_empty(pos) {
            return Transition::Ignored(Ignored::SquareOccupied(pos));
        }

        let next = current.with_mark(pos, self.to_move);
        let winner = check_winner(&next);
        self.history.push(next);

        match winner {
            Some(player) => {
                info!(winner = %player, step = self.history.len() - 1, "Game won");
                self.winner = Some(player);
            }
            None => self.to_move = self.to_move.opponent(),
        }

        assert_invariants(self);
        Transition::Applied
    }

    /// Rewinds to `step`, discarding every later snapshot.
    ///
    /// The turn indicator follows the parity of `step`. A winner is only
    /// kept if the snapshot at `step` still holds a completed line.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) -> Transition {
        let len = self.history.len();
        if step >= len {
            return Transition::Ignored(Ignored::StepOutOfRange { step, len });
        }

        self.history.truncate(step + 1);
        self.to_move = if step % 2 == 0 { Player::X } else { Player::O };
        if self.winner.is_some() {
            self.winner = check_winner(self.current());
        }

        info!(step, discarded = len - step - 1, "Rewound history");
        assert_invariants(self);
        Transition::Applied
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
