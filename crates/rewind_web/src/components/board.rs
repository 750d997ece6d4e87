//! The 3x3 grid.

use super::cell::Cell;
use leptos::prelude::*;
use rewind_tictactoe::{self as tictactoe, Position};

/// Renders a board snapshot as three rows of three cells.
///
/// Each cell's click is translated into `on_play` with that cell's position.
#[component]
pub fn Board(
    /// Snapshot to render.
    board: tictactoe::Board,
    /// Fired with the position of the clicked cell.
    on_play: Callback<Position>,
) -> impl IntoView {
    let rows = Position::ROWS
        .into_iter()
        .map(|row| {
            let cells = row
                .into_iter()
                .map(|pos| {
                    let on_click = Callback::new(move |_: ()| on_play.run(pos));
                    view! { <Cell square=board.get(pos) on_click=on_click /> }
                })
                .collect_view();
            view! { <div class="board-row">{cells}</div> }
        })
        .collect_view();

    view! { <div>{rows}</div> }
}
