//! Application state and event handling.

use crate::input::{Command, command_for_key};
use crate::ui::{self, ClickTargets};
use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::Frame;
use rewind_tictactoe::{Action, Game, Position, Transition};
use tracing::{debug, instrument};

/// Main application state.
///
/// The game is the only state that matters; the cursor and the click
/// targets of the last frame exist only to translate terminal input into
/// game actions.
pub struct App {
    game: Game,
    cursor: Position,
    targets: ClickTargets,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            targets: ClickTargets::default(),
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Renders a frame and remembers where its buttons are.
    pub fn draw(&mut self, frame: &mut Frame) {
        self.targets = ui::draw(frame, &self.game, self.cursor);
    }

    /// Handles one terminal event.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let history_len = self.game.history().len();
                match command_for_key(key.code, self.cursor, history_len) {
                    Some(Command::Dispatch(action)) => {
                        self.dispatch(action);
                    }
                    Some(Command::MoveCursor(pos)) => self.cursor = pos,
                    Some(Command::Quit) => self.should_quit = true,
                    None => {}
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                match self.targets.hit(mouse.column, mouse.row) {
                    Some(action) => {
                        self.dispatch(action);
                    }
                    None => debug!(column = mouse.column, row = mouse.row, "Click outside any button"),
                }
            }
            _ => {}
        }
    }

    fn dispatch(&mut self, action: Action) -> Transition {
        if let Action::Play(pos) = action {
            self.cursor = pos;
        }
        self.game.dispatch(action)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
