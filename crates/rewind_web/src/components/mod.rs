//! Presentation components: `Game` owns the state, `Board` and `Cell` only render.

mod board;
mod cell;
mod game;

pub use game::Game;
