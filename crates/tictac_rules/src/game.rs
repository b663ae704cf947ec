//! Game logic and rules for tic-tac-toe.

use super::action::Move;
use super::error::{InvalidGameError, ParseError, RulesError};
use super::position::Position;
use super::rules;
use super::types::{Board, GameStatus, Player, Square};
use std::str::FromStr;
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
///
/// Owns a single [`Board`]. Seeded boards are taken as given: a board that
/// is already won, or where one player has moved far more often than the
/// other, is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    board: Board,
}

impl Game {
    /// Creates a game on an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Creates a game on the given board.
    #[instrument(fields(board = %board))]
    pub fn with_board(board: Board) -> Self {
        Self { board }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replaces the whole board.
    #[instrument(skip(self), fields(board = %board))]
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    /// Splits a move such as `x5` into its player and position.
    ///
    /// The position is not range-checked here.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] unless `mov` is an `x` or `o` followed by one
    /// decimal digit.
    pub fn decompose_move(mov: &str) -> Result<Move, ParseError> {
        mov.parse()
    }

    /// True if `position` is on the board and its square is empty.
    #[instrument(skip(self))]
    pub fn valid_move(&self, position: i32) -> bool {
        Position::try_from(position).is_ok_and(|pos| self.board.is_empty(pos))
    }

    /// Writes `player` at `position` without checking occupancy.
    #[instrument(skip(self))]
    pub fn set_position(&mut self, position: Position, player: Player) {
        self.board.set(position, Square::Occupied(player));
    }

    /// Places `player` at `position` if the move is valid.
    ///
    /// Returns `false`, leaving the board untouched, when the position is
    /// off the board or already taken.
    #[instrument(skip(self))]
    pub fn place_move(&mut self, player: Player, position: i32) -> bool {
        match Position::try_from(position) {
            Ok(pos) if self.board.is_empty(pos) => {
                self.set_position(pos, player);
                debug!(board = %self.board, "Move placed");
                true
            }
            _ => false,
        }
    }

    /// Returns the player holding a complete line, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(&self.board)
    }

    /// Classifies the board as won, drawn or still open.
    #[instrument(skip(self))]
    pub fn status(&self) -> GameStatus {
        if let Some(player) = self.winner() {
            GameStatus::Won(player)
        } else if rules::is_full(&self.board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Positions still open for play.
    pub fn open_positions(&self) -> Vec<Position> {
        Position::open(&self.board)
    }

    /// Plays `moves` in order and reports the winner, if any.
    ///
    /// Stops at the first winning move; later moves are not applied.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError::Parse`] for a malformed move and
    /// [`RulesError::InvalidGame`] for a move onto an occupied or
    /// out-of-range square. The board keeps every move applied before the
    /// failing one.
    #[instrument(skip(self, moves))]
    pub fn play_moves<I, S>(&mut self, moves: I) -> Result<Option<Player>, RulesError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for (step, mov) in moves.into_iter().enumerate() {
            let mov = mov.as_ref();
            let decomposed = Self::decompose_move(mov)?;

            if !self.place_move(decomposed.player(), i32::from(decomposed.position())) {
                warn!(mov, step, board = %self.board, "Move rejected");
                return Err(InvalidGameError::new(mov.to_string(), step).into());
            }

            if let Some(winner) = self.winner() {
                info!(%winner, step, "Winning move");
                return Ok(Some(winner));
            }
        }

        Ok(None)
    }
}

impl FromStr for Game {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::with_board(s.parse()?))
    }
}
