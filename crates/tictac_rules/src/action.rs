//! Moves as submitted by callers: a player symbol followed by a digit.

use super::error::ParseError;
use super::types::Player;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A decomposed move such as `x5`.
///
/// The digit is kept as written; whether it names a cell on the board is
/// decided when the move is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new)]
pub struct Move {
    /// The player making the move.
    #[getter(copy)]
    player: Player,
    /// The requested position (0-9).
    #[getter(copy)]
    position: u8,
}

impl FromStr for Move {
    type Err = ParseError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(symbol), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseError::MoveShape(s.to_string()));
        };
        let position = digit
            .to_digit(10)
            .ok_or_else(|| ParseError::MoveShape(s.to_string()))?;
        let player = Player::from_symbol(symbol).ok_or(ParseError::UnknownPlayer(symbol))?;

        Ok(Self::new(player, position as u8))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.player, self.position)
    }
}
