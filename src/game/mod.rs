//! Rules engine and turn controller.
pub(crate) mod board;
pub(crate) mod components;
pub(crate) mod error;
mod game;

pub use board::{Board, Line};
pub use components::{Cell, Column, Mode, Outcome, Player, Seat, State};
pub use error::{Error, GameResult};
pub use game::{Frame, Game, MoveSource, Placement, Renderer};
