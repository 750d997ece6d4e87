//! Named board positions.

use super::types::Board;
use strum::IntoEnumIterator;
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Position {
    /// Top-left (index 0)
    #[strum(to_string = "Top-left")]
    TopLeft,
    /// Top-center (index 1)
    #[strum(to_string = "Top-center")]
    TopCenter,
    /// Top-right (index 2)
    #[strum(to_string = "Top-right")]
    TopRight,
    /// Middle-left (index 3)
    #[strum(to_string = "Middle-left")]
    MiddleLeft,
    /// Center (index 4)
    #[strum(to_string = "Center")]
    Center,
    /// Middle-right (index 5)
    #[strum(to_string = "Middle-right")]
    MiddleRight,
    /// Bottom-left (index 6)
    #[strum(to_string = "Bottom-left")]
    BottomLeft,
    /// Bottom-center (index 7)
    #[strum(to_string = "Bottom-center")]
    BottomCenter,
    /// Bottom-right (index 8)
    #[strum(to_string = "Bottom-right")]
    BottomRight,
}

impl Position {
    /// All nine positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// The board as three rows of three, in row-major order.
    pub const ROWS: [[Position; 3]; 3] = [
        [Position::TopLeft, Position::TopCenter, Position::TopRight],
        [Position::MiddleLeft, Position::Center, Position::MiddleRight],
        [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    ];

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row (0-2) this position sits in.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column (0-2) this position sits in.
    pub fn column(self) -> usize {
        self.to_index() % 3
    }

    /// Position at the given row and column, if both are on the board.
    pub fn at(row: usize, column: usize) -> Option<Self> {
        if row < 3 && column < 3 {
            Self::from_index(row * 3 + column)
        } else {
            None
        }
    }

    /// Returns the positions still empty on `board`.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::iter().filter(|pos| board.is_empty(*pos)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (idx, pos) in Position::iter().enumerate() {
            assert_eq!(pos.to_index(), idx);
            assert_eq!(Position::from_index(idx), Some(pos));
        }
        assert_eq!(Position::from_index(9), None);
        assert_eq!(Position::ALL.to_vec(), Position::iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_rows_are_row_major() {
        let flattened: Vec<usize> = Position::ROWS
            .iter()
            .flatten()
            .map(|pos| pos.to_index())
            .collect();
        assert_eq!(flattened, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_row_and_column() {
        assert_eq!(Position::MiddleRight.row(), 1);
        assert_eq!(Position::MiddleRight.column(), 2);
        assert_eq!(Position::at(2, 0), Some(Position::BottomLeft));
        assert_eq!(Position::at(3, 0), None);
    }

    #[test]
    fn test_label() {
        assert_eq!(Position::TopLeft.to_string(), "Top-left");
        assert_eq!(Position::Center.to_string(), "Center");
    }
}
