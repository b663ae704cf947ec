//! Tests for board construction, validation and placement.

use tictac_rules::{Board, Game, GameStatus, Player, Position, Square};

#[test]
fn test_default_board_is_empty() {
    let game = Game::new();
    assert_eq!(game.board().to_string(), "---------");
    assert!(game.board().squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(Game::default(), game);
}

#[test]
fn test_seeded_board_round_trips() {
    for seed in ["xoxoxooxo", "x--------", "---------", "ooooooooo"] {
        let game: Game = seed.parse().unwrap();
        assert_eq!(game.board().to_string(), seed);
    }
}

#[test]
fn test_set_board_replaces_everything() {
    let mut game: Game = "xxx------".parse().unwrap();
    game.set_board("----o----".parse().unwrap());
    assert_eq!(game.board().to_string(), "----o----");
    assert_eq!(game.winner(), None);
}

#[test]
fn test_seed_may_already_be_won() {
    let game = Game::with_board("xxxxxxxxx".parse().unwrap());
    assert_eq!(game.winner(), Some(Player::X));
}

#[test]
fn test_valid_move_bounds() {
    let game = Game::new();
    assert!(!game.valid_move(-1));
    assert!(!game.valid_move(9));
    assert!(!game.valid_move(i32::MIN));
    assert!(!game.valid_move(i32::MAX));
    for position in 0..9 {
        assert!(game.valid_move(position), "position {position}");
    }
}

#[test]
fn test_valid_move_rejects_occupied() {
    let game: Game = "x---o----".parse().unwrap();
    assert!(!game.valid_move(0));
    assert!(!game.valid_move(4));
    assert!(game.valid_move(1));
    assert!(game.valid_move(8));
}

#[test]
fn test_set_position_touches_one_cell() {
    let mut game = Game::new();
    game.set_position(Position::MiddleRight, Player::O);
    assert_eq!(game.board().get(Position::MiddleRight), Square::Occupied(Player::O));
    assert_eq!(game.board().to_string(), "-----o---");
}

#[test]
fn test_set_position_overwrites() {
    let mut game: Game = "x--------".parse().unwrap();
    game.set_position(Position::TopLeft, Player::O);
    assert_eq!(game.board().to_string(), "o--------");
}

#[test]
fn test_place_move_valid() {
    let mut game = Game::new();
    assert!(game.place_move(Player::X, 4));
    assert_eq!(game.board().to_string(), "----x----");
}

#[test]
fn test_place_move_invalid_leaves_board_unchanged() {
    let mut game: Game = "xo-------".parse().unwrap();
    let before = game.board().clone();

    assert!(!game.place_move(Player::O, 0));
    assert!(!game.place_move(Player::X, 1));
    assert!(!game.place_move(Player::X, -1));
    assert!(!game.place_move(Player::X, 9));

    assert_eq!(game.board(), &before);
}

#[test]
fn test_decompose_move() {
    let mov = Game::decompose_move("x5").unwrap();
    assert_eq!(mov.player(), Player::X);
    assert_eq!(mov.position(), 5);
}

#[test]
fn test_decompose_move_rejects_malformed() {
    assert!(Game::decompose_move("x").is_err());
    assert!(Game::decompose_move("x55").is_err());
    assert!(Game::decompose_move("q1").is_err());
}

#[test]
fn test_status() {
    assert_eq!(Game::new().status(), GameStatus::InProgress);
    let drawn: Game = "xoxoxooxo".parse().unwrap();
    assert_eq!(drawn.status(), GameStatus::Draw);
    let won: Game = "o..o..o..".parse().unwrap();
    assert_eq!(won.status(), GameStatus::Won(Player::O));
}

#[test]
fn test_open_positions() {
    let game: Game = "xoxoxoxo-".parse().unwrap();
    assert_eq!(game.open_positions(), vec![Position::BottomRight]);
    assert_eq!(Game::new().open_positions(), Position::ALL.to_vec());
}

#[test]
fn test_board_from_squares() {
    let mut squares = [Square::Empty; 9];
    squares[2] = Square::Occupied(Player::X);
    assert_eq!(Board::from_squares(squares).to_string(), "--x------");
}
