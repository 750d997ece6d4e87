//! Keyboard bindings.

use crossterm::event::KeyCode;
use rewind_tictactoe::{Action, Position};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Send an action to the game.
    Dispatch(Action),
    /// Move the keyboard cursor.
    MoveCursor(Position),
    /// Leave the app.
    Quit,
}

/// Maps a key to a command. `history_len` is needed for stepping back.
pub fn command_for_key(code: KeyCode, cursor: Position, history_len: usize) -> Option<Command> {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map(|pos| Command::Dispatch(Action::Play(pos))),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Dispatch(Action::Play(cursor))),
        KeyCode::Backspace if history_len >= 2 => {
            Some(Command::Dispatch(Action::JumpTo(history_len - 2)))
        }
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Command::MoveCursor(move_cursor(cursor, code)))
        }
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, column) = (cursor.row(), cursor.column());

    let target = match key {
        KeyCode::Up => row.checked_sub(1).and_then(|row| Position::at(row, column)),
        KeyCode::Down => Position::at(row + 1, column),
        KeyCode::Left => column.checked_sub(1).and_then(|column| Position::at(row, column)),
        KeyCode::Right => Position::at(row, column + 1),
        _ => None,
    };

    target.unwrap_or(cursor)
}
