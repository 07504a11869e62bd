//! Tests for the history engine: moves, turn alternation, and time travel.

use tictactoe_engine::{Game, MoveError, Player, Position, Square, Status};

#[test]
fn test_new_game_starts_with_empty_snapshot() {
    let game = Game::new();
    assert_eq!(game.history().len(), 1);
    assert_eq!(game.current_step(), 0);
    assert!(game
        .current_board()
        .squares()
        .iter()
        .all(|&s| s == Square::Empty));
    assert_eq!(game.status(), Status::NextTurn(Player::X));
}

#[test]
fn test_first_move_is_x() {
    let mut game = Game::new();
    game.apply_move(Position::Center).expect("valid move");
    assert_eq!(
        game.current_board().get(Position::Center),
        Square::Occupied(Player::X)
    );
}

#[test]
fn test_moves_alternate_marks() {
    let mut game = Game::new();
    game.apply_move(Position::TopLeft).expect("valid move");
    game.apply_move(Position::Center).expect("valid move");
    game.apply_move(Position::TopRight).expect("valid move");

    let board = game.current_board();
    assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(board.get(Position::Center), Square::Occupied(Player::O));
    assert_eq!(board.get(Position::TopRight), Square::Occupied(Player::X));
    assert_eq!(game.to_move(), Player::O);
}

#[test]
fn test_occupied_cell_rejected_and_state_unchanged() {
    let mut game = Game::new();
    game.apply_move(Position::Center).expect("valid move");
    let before = game.clone();

    let result = game.apply_move(Position::Center);
    assert_eq!(result, Err(MoveError::CellOccupied(Position::Center)));
    assert_eq!(game, before);
}

/// X takes the left column: 0, 3, 6.
fn play_x_wins_left_column(game: &mut Game) {
    game.apply_move(Position::TopLeft).expect("X at 0");
    game.apply_move(Position::TopCenter).expect("O at 1");
    game.apply_move(Position::MiddleLeft).expect("X at 3");
    game.apply_move(Position::Center).expect("O at 4");
    game.apply_move(Position::BottomLeft).expect("X at 6");
}

#[test]
fn test_win_detection_reports_winner() {
    let mut game = Game::new();
    play_x_wins_left_column(&mut game);
    assert_eq!(game.status(), Status::Won(Player::X));
}

#[test]
fn test_moves_after_win_rejected() {
    let mut game = Game::new();
    play_x_wins_left_column(&mut game);
    let before = game.clone();

    let result = game.apply_move(Position::BottomRight);
    assert_eq!(result, Err(MoveError::GameAlreadyWon));
    assert_eq!(game, before);
}

#[test]
fn test_jump_to_changes_view_only() {
    let mut game = Game::new();
    game.apply_move(Position::TopLeft).expect("valid move");
    game.apply_move(Position::Center).expect("valid move");

    game.jump_to(1).expect("step in range");
    assert_eq!(game.current_step(), 1);
    assert_eq!(game.history().len(), 3);
    assert_eq!(game.to_move(), Player::O);
    assert_eq!(
        game.current_board().get(Position::Center),
        Square::Empty
    );

    game.jump_to(0).expect("step in range");
    assert_eq!(game.to_move(), Player::X);
    assert_eq!(game.history().len(), 3);
}

#[test]
fn test_jump_out_of_range_rejected() {
    let mut game = Game::new();
    game.apply_move(Position::TopLeft).expect("valid move");
    let before = game.clone();

    assert_eq!(game.jump_to(2), Err(MoveError::InvalidStep(2)));
    assert_eq!(game, before);
}

#[test]
fn test_move_after_jump_discards_forward_history() {
    let mut game = Game::new();
    game.apply_move(Position::TopLeft).expect("X at 0");
    game.apply_move(Position::TopCenter).expect("O at 1");
    game.apply_move(Position::TopRight).expect("X at 2");
    assert_eq!(game.history().len(), 4);

    game.jump_to(1).expect("step in range");
    game.apply_move(Position::Center).expect("O at 4");

    assert_eq!(game.history().len(), 3);
    assert_eq!(game.current_step(), 2);

    let board = game.current_board();
    assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(board.get(Position::Center), Square::Occupied(Player::O));
    // The original second and third moves are gone.
    assert_eq!(board.get(Position::TopCenter), Square::Empty);
    assert_eq!(board.get(Position::TopRight), Square::Empty);
}

#[test]
fn test_jump_during_won_game_is_pure_view_change() {
    let mut game = Game::new();
    play_x_wins_left_column(&mut game);
    assert_eq!(game.history().len(), 6);

    game.jump_to(2).expect("step in range");
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.status(), Status::NextTurn(Player::X));

    game.jump_to(5).expect("step in range");
    assert_eq!(game.status(), Status::Won(Player::X));
}

#[test]
fn test_earlier_snapshots_are_never_mutated() {
    let mut game = Game::new();
    game.apply_move(Position::Center).expect("valid move");
    game.apply_move(Position::TopLeft).expect("valid move");

    let start = &game.history()[0];
    assert!(start.squares().iter().all(|&s| s == Square::Empty));
    let after_first = &game.history()[1];
    assert_eq!(after_first.get(Position::Center), Square::Occupied(Player::X));
    assert_eq!(after_first.get(Position::TopLeft), Square::Empty);
}

#[test]
fn test_status_display_matches_ui_strings() {
    let mut game = Game::new();
    assert_eq!(game.status().to_string(), "Next player: X");
    game.apply_move(Position::Center).expect("valid move");
    assert_eq!(game.status().to_string(), "Next player: O");

    let mut game = Game::new();
    play_x_wins_left_column(&mut game);
    assert_eq!(game.status().to_string(), "Winner: X");
}

#[test]
fn test_board_display_grid() {
    let mut game = Game::new();
    game.apply_move(Position::Center).expect("valid move");
    game.apply_move(Position::TopLeft).expect("valid move");

    let expected = "O|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9";
    assert_eq!(game.current_board().display(), expected);
}

#[test]
fn test_serde_round_trip_preserves_history_and_step() {
    let mut game = Game::new();
    game.apply_move(Position::TopLeft).expect("valid move");
    game.apply_move(Position::Center).expect("valid move");
    game.jump_to(1).expect("step in range");

    let json = serde_json::to_string(&game).expect("serialize");
    let restored: Game = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, game);
    assert_eq!(restored.current_step(), 1);
    assert_eq!(restored.history().len(), 3);
}
