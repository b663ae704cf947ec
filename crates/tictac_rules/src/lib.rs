//! Tic-tac-toe rules engine.
//!
//! Tracks a 3x3 board, validates and applies moves written as
//! `<player><digit>` (for example `x4`), and reports the winner.
//!
//! # Example
//!
//! ```
//! use tictac_rules::{Game, Player};
//!
//! # fn example() -> Result<(), tictac_rules::RulesError> {
//! let mut game = Game::new();
//! let winner = game.play_moves(["x0", "o3", "x1", "o4", "x2"])?;
//! assert_eq!(winner, Some(Player::X));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! Boards can also be seeded from their nine-character text form:
//!
//! ```
//! use tictac_rules::{Game, Player};
//!
//! let game: Game = "o...o...o".parse().unwrap();
//! assert_eq!(game.winner(), Some(Player::O));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod game;
mod kani_support;
mod position;
pub mod rules;
mod types;

pub use action::Move;
pub use error::{InvalidGameError, ParseError, RulesError};
pub use game::Game;
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};
