//! Kani arbitrary implementations and proof harnesses.
//!
//! Only compiled under `cargo kani`.

#[cfg(kani)]
use super::{Board, Game, Player, Position, Square, rules};

#[cfg(kani)]
impl kani::Arbitrary for Player {
    fn any() -> Self {
        if kani::any() { Player::X } else { Player::O }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Position {
    fn any() -> Self {
        let index: usize = kani::any();
        kani::assume(index < 9);
        Position::ALL[index]
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Square {
    fn any() -> Self {
        if kani::any() {
            Square::Empty
        } else {
            Square::Occupied(kani::any())
        }
    }
}

#[cfg(kani)]
impl kani::Arbitrary for Board {
    fn any() -> Self {
        Board::from_squares(kani::any())
    }
}

#[cfg(kani)]
#[kani::proof]
fn rejected_placement_leaves_board_unchanged() {
    let board: Board = kani::any();
    let mut game = Game::with_board(board.clone());
    let player: Player = kani::any();
    let position: i32 = kani::any();

    if !game.place_move(player, position) {
        assert_eq!(game.board(), &board);
    }
}

#[cfg(kani)]
#[kani::proof]
fn accepted_placement_writes_one_square() {
    let board: Board = kani::any();
    let mut game = Game::with_board(board.clone());
    let player: Player = kani::any();
    let pos: Position = kani::any();

    if game.place_move(player, pos.to_index() as i32) {
        assert_eq!(game.board().get(pos), Square::Occupied(player));
        for other in Position::ALL {
            if other != pos {
                assert_eq!(game.board().get(other), board.get(other));
            }
        }
    }
}

#[cfg(kani)]
#[kani::proof]
fn winner_holds_a_complete_line() {
    let board: Board = kani::any();
    if let Some(player) = rules::check_winner(&board) {
        assert!(rules::LINES.iter().any(|line| line
            .iter()
            .all(|pos| board.get(*pos) == Square::Occupied(player))));
    }
}
