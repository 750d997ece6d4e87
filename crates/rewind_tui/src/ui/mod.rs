//! UI rendering using ratatui.
//!
//! Rendering is stateless: every frame is drawn from the game snapshot, and
//! each clickable widget registers the action it stands for in
//! [`ClickTargets`]. Mouse clicks are resolved against the targets of the
//! last frame.

mod board;
mod cell;
mod history;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::{Action, Game, Position};

pub use board::render_board;
pub use history::render_history;

/// Screen areas that respond to clicks, with the action each one sends.
#[derive(Debug, Clone, Default)]
pub struct ClickTargets {
    targets: Vec<(Rect, Action)>,
}

impl ClickTargets {
    /// Registers `area` as a button for `action`.
    pub fn register(&mut self, area: Rect, action: Action) {
        self.targets.push((area, action));
    }

    /// Action under the given terminal cell, if any.
    pub fn hit(&self, column: u16, row: u16) -> Option<Action> {
        let point = ratatui::layout::Position::new(column, row);
        self.targets
            .iter()
            .find(|(area, _)| area.contains(point))
            .map(|(_, action)| *action)
    }

    /// Area registered for `action`, if it was drawn.
    #[cfg(test)]
    pub fn area_of(&self, action: Action) -> Option<Rect> {
        self.targets
            .iter()
            .find(|(_, registered)| *registered == action)
            .map(|(area, _)| *area)
    }
}

/// Draws the whole game and returns the click targets of this frame.
pub fn draw(frame: &mut Frame, game: &Game, cursor: Position) -> ClickTargets {
    let mut targets = ClickTargets::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(board::HEIGHT),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(board::WIDTH + 4), Constraint::Min(24)])
        .split(chunks[1]);

    render_board(frame, body[0], game.current(), cursor, &mut targets);
    render_history(frame, body[1], &game.moves(), &mut targets);

    let status = Paragraph::new(game.status().to_string())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("Click or 1-9: play | Arrows+Enter: play cursor | Backspace: step back | Q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    targets
}

/// Rect of `width` x `height` centered in `area`, clipped to it.
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
