//! Tic-tac-toe board rendering.

use super::{ClickTargets, center_rect, cell::render_cell};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};
use rewind_tictactoe::{Action, Board, Position};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Width of the rendered grid, separators included.
pub const WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Height of the rendered grid, separators included.
pub const HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Renders the board as three rows of three cells, row-major.
///
/// Each cell is wired to `Action::Play` with its own position.
pub fn render_board(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Position,
    targets: &mut ClickTargets,
) {
    let board_area = center_rect(area, WIDTH, HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    for (row_idx, positions) in Position::ROWS.iter().enumerate() {
        if row_idx > 0 {
            render_separator(frame, rows[row_idx * 2 - 1]);
        }
        render_row(frame, rows[row_idx * 2], board, cursor, positions, targets);
    }
}

fn render_row(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Position,
    positions: &[Position; 3],
    targets: &mut ClickTargets,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    for (col_idx, pos) in positions.iter().enumerate() {
        if col_idx > 0 {
            render_vertical_sep(frame, cols[col_idx * 2 - 1]);
        }
        render_cell(
            frame,
            cols[col_idx * 2],
            board.get(*pos),
            *pos == cursor,
            Action::Play(*pos),
            targets,
        );
    }
}

fn render_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn render_vertical_sep(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{center, terminal};
    use super::*;

    fn draw_board(board: &Board) -> (ratatui::Terminal<ratatui::backend::TestBackend>, ClickTargets) {
        let mut terminal = terminal();
        let mut targets = ClickTargets::default();
        terminal
            .draw(|f| {
                let area = f.area();
                render_board(f, area, board, Position::Center, &mut targets);
            })
            .unwrap();
        (terminal, targets)
    }

    #[test]
    fn test_cells_are_laid_out_row_major() {
        let (_, targets) = draw_board(&Board::new());

        for row in Position::ROWS {
            let areas: Vec<Rect> = row
                .iter()
                .map(|pos| targets.area_of(Action::Play(*pos)).unwrap())
                .collect();
            assert!(areas[0].x < areas[1].x && areas[1].x < areas[2].x);
            assert!(areas.iter().all(|a| a.y == areas[0].y));
        }

        let top = targets.area_of(Action::Play(Position::TopLeft)).unwrap();
        let middle = targets.area_of(Action::Play(Position::MiddleLeft)).unwrap();
        let bottom = targets.area_of(Action::Play(Position::BottomLeft)).unwrap();
        assert!(top.y < middle.y && middle.y < bottom.y);
    }

    #[test]
    fn test_click_inside_cell_maps_to_its_position() {
        let (_, targets) = draw_board(&Board::new());

        for pos in Position::ROWS.iter().flatten() {
            let area = targets.area_of(Action::Play(*pos)).unwrap();
            let (x, y) = center(area);
            assert_eq!(targets.hit(x, y), Some(Action::Play(*pos)));
        }
    }

    #[test]
    fn test_marks_are_drawn_in_their_cells() {
        let board = Board::new()
            .with_mark(Position::TopRight, rewind_tictactoe::Player::X)
            .with_mark(Position::BottomLeft, rewind_tictactoe::Player::O);
        let (terminal, targets) = draw_board(&board);
        let buffer = terminal.backend().buffer();

        let (x, y) = center(targets.area_of(Action::Play(Position::TopRight)).unwrap());
        assert_eq!(buffer[(x, y)].symbol(), "X");

        let (x, y) = center(targets.area_of(Action::Play(Position::BottomLeft)).unwrap());
        assert_eq!(buffer[(x, y)].symbol(), "O");

        let (x, y) = center(targets.area_of(Action::Play(Position::Center)).unwrap());
        assert_eq!(buffer[(x, y)].symbol(), " ");
    }
}
