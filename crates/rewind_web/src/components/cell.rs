//! A single board square.

use leptos::prelude::*;
use rewind_tictactoe::Square;

/// One square rendered as a button.
///
/// Stateless: clicks are forwarded as-is and legality is left to the game.
#[component]
pub fn Cell(
    /// Value shown in the square.
    square: Square,
    /// Fired with no arguments when the square is clicked.
    on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button class="square" on:click=move |_| on_click.run(())>
            {square.symbol()}
        </button>
    }
}
