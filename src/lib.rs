#![warn(missing_docs)]
//! Connect 4 in the terminal, against a random AI or another player.
pub mod ai;
pub mod config;
pub mod console;
pub mod game;

pub use ai::RandomAgent;
pub use game::{Board, Cell, Column, Error, Game, GameResult, Mode, Outcome, Player, State};
