//! Values derived from the game for display, recomputed on every render.

use super::{Game, Player};
use derive_getters::Getters;
use derive_more::Display;

/// Status line shown above the history list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Status {
    /// A line has been completed.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// The game is open; the given mark plays next.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// One clickable entry in the move-history list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct HistoryEntry {
    /// History step this entry jumps to.
    step: usize,
    /// Button label.
    label: String,
}

impl HistoryEntry {
    /// Builds the entry for `step`.
    pub fn new(step: usize) -> Self {
        let label = if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to step #{}", step)
        };
        Self { step, label }
    }
}

impl Game {
    /// Status line: the winner if there is one, otherwise the next mark.
    pub fn status(&self) -> Status {
        match self.winner() {
            Some(player) => Status::Winner(player),
            None => Status::NextPlayer(self.to_move()),
        }
    }

    /// One jump entry per snapshot in history, oldest first.
    pub fn moves(&self) -> Vec<HistoryEntry> {
        (0..self.history().len()).map(HistoryEntry::new).collect()
    }
}
