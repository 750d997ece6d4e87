//! Tests for move play, turn alternation and illegal-move handling.

use rewind_tictactoe::{Action, Board, Game, Ignored, Phase, Player, Position, Status, Transition};

fn game_after(moves: &[usize]) -> Game {
    let mut game = Game::new();
    for idx in moves {
        let pos = Position::from_index(*idx).expect("index on board");
        assert_eq!(game.dispatch(Action::Play(pos)), Transition::Applied);
    }
    game
}

#[test]
fn test_initial_state() {
    let game = Game::new();

    assert_eq!(game.current(), &Board::new());
    assert_eq!(game.status().to_string(), "Next player: X");

    let moves = game.moves();
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].label(), "Go to game start");
}

#[test]
fn test_turn_alternation() {
    let mut game = Game::new();
    // A sequence with no three-in-a-row until the board is full.
    let sequence = [0, 4, 8, 1, 7, 6, 2, 5, 3];

    for (k, idx) in sequence.iter().enumerate() {
        let pos = Position::from_index(*idx).expect("index on board");
        game.dispatch(Action::Play(pos));
        assert_eq!(game.x_is_next(), k % 2 == 1, "after move {}", k);
    }
}

#[test]
fn test_occupied_square_is_noop() {
    let mut game = game_after(&[4]);
    let before = game.clone();

    let transition = game.dispatch(Action::Play(Position::Center));

    assert_eq!(
        transition,
        Transition::Ignored(Ignored::SquareOccupied(Position::Center))
    );
    assert_eq!(game, before);
}

#[test]
fn test_move_after_win_is_noop() {
    let mut game = game_after(&[0, 3, 1, 4, 2]);
    let before = game.clone();

    for pos in Position::valid_moves(game.current()) {
        let transition = game.dispatch(Action::Play(pos));
        assert_eq!(transition, Transition::Ignored(Ignored::GameOver(Player::X)));
    }
    assert_eq!(game, before);
}

#[test]
fn test_draw_keeps_next_player_status() {
    // X O X / X O O / O X X
    let game = game_after(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(game.current().occupied(), 9);
    assert_eq!(game.winner(), None);
    assert_eq!(game.phase(), Phase::Playing);
    assert!(matches!(game.status(), Status::NextPlayer(_)));
}

#[test]
fn test_end_to_end_row_win() {
    let game = game_after(&[0, 3, 1, 4, 2]);

    assert_eq!(game.winner(), Some(Player::X));
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.status().to_string(), "Winner: X");
}
