//! Fixed game parameters.

use log::LevelFilter;

/// Number of columns on the board.
pub const BOARD_WIDTH: usize = 7;

/// Number of rows on the board. Row 0 is the top row.
pub const BOARD_HEIGHT: usize = 6;

/// Number of same-symbol cells in a line needed to win.
pub const CONNECT: usize = 4;

/// Symbol for player one's pieces.
pub const PLAYER_ONE_SYMBOL: char = 'O';
/// Symbol for player two's pieces.
pub const PLAYER_TWO_SYMBOL: char = 'X';
/// Symbol for an empty cell in the text form of a board.
pub const EMPTY_SYMBOL: char = '.';

/// Log level used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

/// Presence of this variable disables ANSI colours on the console.
pub const NO_COLOR_ENV: &str = "NO_COLOR";
