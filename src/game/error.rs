/// All the errors produced by the game.
///
/// `ColumnFull` and `InvalidColumn` are recoverable: the move is refused and
/// the player is asked again. `OutOfRange` means a caller used coordinates
/// outside the grid.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Coordinates outside the grid.
    #[error("cell (row {row}, column {col}) is outside the board")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column index.
        col: usize,
    },

    /// No empty cell left in the column (zero indexed).
    #[error("column index {0} is full")]
    ColumnFull(usize),

    /// Column label outside `1..=7`.
    #[error("column {0} does not exist")]
    InvalidColumn(usize),

    /// A move was submitted after the game ended.
    #[error("the game is already over")]
    GameOver,

    /// Board text with the wrong shape, unknown symbols or floating pieces.
    #[error("invalid board layout: {0}")]
    InvalidBoard(String),

    /// A line that is neither a command nor a number.
    #[error("invalid input: {0:?}")]
    InvalidInput(String),

    /// The player asked to leave.
    #[error("quit requested")]
    Quit,

    /// End of input.
    #[error("input closed")]
    InputClosed,

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type making use of custom errors.
pub type GameResult<T> = Result<T, Error>;
