//! Error types for board parsing, move parsing and move sequences.

use derive_getters::Getters;
use derive_more::{Display, Error, From};
use derive_new::new;

/// Failure to read a board or a move from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseError {
    /// A board string did not have exactly nine cells.
    #[display("Parse error: board must have 9 cells, got {_0}")]
    BoardLength(#[error(not(source))] usize),

    /// A board string contained a character outside `x`, `o`, `-` and `.`.
    #[display("Parse error: invalid board symbol {symbol:?} at cell {index}")]
    BoardSymbol {
        /// Cell index of the offending character.
        index: usize,
        /// The offending character.
        symbol: char,
    },

    /// A move was not a player symbol followed by a single digit.
    #[display("Parse error: move {_0:?} is not <player><digit>")]
    MoveShape(#[error(not(source))] String),

    /// A move named a player other than `x` or `o`.
    #[display("Parse error: unknown player {_0:?}")]
    UnknownPlayer(#[error(not(source))] char),
}

/// A move sequence contained a move the board rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, Getters, new)]
#[display("Invalid game: move {mov:?} at step {step} targets an occupied or out-of-range square")]
pub struct InvalidGameError {
    /// The rejected move as submitted.
    mov: String,
    /// Zero-based position of the move in the sequence.
    step: usize,
}

/// Any failure of [`Game::play_moves`](crate::Game::play_moves).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum RulesError {
    /// A move could not be decomposed.
    #[display("{_0}")]
    Parse(ParseError),
    /// A move was rejected by the board.
    #[display("{_0}")]
    InvalidGame(InvalidGameError),
}
