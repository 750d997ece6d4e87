//! The stateful root component.

use super::board::Board;
use leptos::prelude::*;
use rewind_tictactoe::{self as tictactoe, Action, Position};

/// Owns the game and renders the board, status line and history list.
///
/// Every click ends up as an [`Action`] applied to the single game signal;
/// children only see the snapshot for the current render.
#[component]
pub fn Game() -> impl IntoView {
    let game = RwSignal::new(tictactoe::Game::new());

    let dispatch = move |action: Action| {
        game.update(|state| {
            state.dispatch(action);
        })
    };
    let on_play = Callback::new(move |pos: Position| dispatch(Action::Play(pos)));

    let board = move || {
        let snapshot = game.with(|state| state.current().clone());
        view! { <Board board=snapshot on_play=on_play /> }
    };

    let status = move || game.with(|state| state.status().to_string());

    let moves = move || {
        game.with(|state| state.moves())
            .into_iter()
            .map(|entry| {
                let step = *entry.step();
                view! {
                    <li>
                        <button on:click=move |_| dispatch(Action::JumpTo(step))>
                            {entry.label().clone()}
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <div class="game">
            <div class="game-board">{board}</div>
            <div class="game-info">
                <div>{status}</div>
                <ol>{moves}</ol>
            </div>
        </div>
    }
}
