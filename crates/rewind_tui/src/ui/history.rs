//! Move-history list.

use super::ClickTargets;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::{Action, HistoryEntry};

/// Renders one numbered row per history entry, each a button for `JumpTo`.
///
/// Rows that do not fit in `area` are not drawn.
pub fn render_history(
    frame: &mut Frame,
    area: Rect,
    entries: &[HistoryEntry],
    targets: &mut ClickTargets,
) {
    let block = Block::default().borders(Borders::ALL).title("History");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    for (idx, entry) in entries.iter().take(inner.height as usize).enumerate() {
        let row = Rect {
            y: inner.y + idx as u16,
            height: 1,
            ..inner
        };
        let text = format!("{:>2}. {}", idx + 1, entry.label());
        frame.render_widget(
            Paragraph::new(text).style(Style::default().fg(Color::White)),
            row,
        );
        targets.register(row, Action::JumpTo(*entry.step()));
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{row_text, terminal};
    use super::*;
    use rewind_tictactoe::{Game, Position};

    #[test]
    fn test_one_row_per_snapshot() {
        let mut game = Game::new();
        game.play(Position::Center);
        game.play(Position::TopLeft);

        let mut terminal = terminal();
        let mut targets = ClickTargets::default();
        terminal
            .draw(|f| {
                let area = f.area();
                render_history(f, area, &game.moves(), &mut targets);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();

        for (step, label) in ["Go to game start", "Go to step #1", "Go to step #2"]
            .iter()
            .enumerate()
        {
            let row = targets.area_of(Action::JumpTo(step)).unwrap();
            assert!(row_text(buffer, row, row.y).contains(label));
            assert_eq!(targets.hit(row.x, row.y), Some(Action::JumpTo(step)));
        }
        assert_eq!(targets.area_of(Action::JumpTo(3)), None);
    }

    #[test]
    fn test_rows_beyond_area_are_skipped() {
        let entries: Vec<HistoryEntry> = (0..5).map(HistoryEntry::new).collect();

        let mut terminal = terminal();
        let mut targets = ClickTargets::default();
        terminal
            .draw(|f| render_history(f, Rect::new(0, 0, 30, 4), &entries, &mut targets))
            .unwrap();

        assert!(targets.area_of(Action::JumpTo(1)).is_some());
        assert_eq!(targets.area_of(Action::JumpTo(2)), None);
    }
}
