//! A single board square.

use super::ClickTargets;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use rewind_tictactoe::{Action, Player, Square};

/// Draws one square and registers its area as a button for `on_click`.
///
/// The cell does not look at the game: whether `on_click` is legal is
/// decided when the action is dispatched.
pub fn render_cell(
    frame: &mut Frame,
    area: Rect,
    square: Square,
    selected: bool,
    on_click: Action,
    targets: &mut ClickTargets,
) {
    let base_style = match square {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Player::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Square::Occupied(Player::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    let style = if selected {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    frame.render_widget(Block::default().style(style), area);

    let middle = Rect {
        y: area.y + area.height / 2,
        height: area.height.min(1),
        ..area
    };
    let symbol = Paragraph::new(Line::from(Span::styled(square.symbol(), style)))
        .alignment(Alignment::Center);
    frame.render_widget(symbol, middle);

    targets.register(area, on_click);
}
