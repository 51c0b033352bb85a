use crate::{
    config::{BOARD_HEIGHT as H, BOARD_WIDTH as W, CONNECT},
    game::{
        components::{Cell, Outcome, Player},
        error::{Error, GameResult},
    },
};

/// Coordinates `(row, col)` of a winning line.
pub type Line = [(usize, usize); CONNECT];

/// Steps `(row, col)` for the four axes: right, down, down-right, down-left.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// The playing grid. Row 0 is the top, pieces settle towards row `H - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Cell; W]; H],
}

impl Board {
    /// Create a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if the position is outside the grid.
    pub fn cell_at(&self, row: usize, col: usize) -> GameResult<Cell> {
        if row >= H || col >= W {
            return Err(Error::OutOfRange { row, col });
        }
        Ok(self.cells[row][col])
    }

    /// All cells, top row first.
    pub fn rows(&self) -> &[[Cell; W]; H] {
        &self.cells
    }

    /// Drop a piece into the given column (zero indexed).
    ///
    /// Returns the row the piece landed in.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if the column is outside the board.
    ///
    /// Returns `Error::ColumnFull` if there is no empty cell left in the column.
    /// The board is left untouched in both cases.
    pub fn drop_piece(&mut self, col: usize, player: Player) -> GameResult<usize> {
        if col >= W {
            return Err(Error::OutOfRange { row: 0, col });
        }
        for row in (0..H).rev() {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = player.into();
                log::trace!("{player} dropped into column index {col}, row {row}");
                return Ok(row);
            }
        }
        Err(Error::ColumnFull(col))
    }

    /// A column is playable while its top cell is empty.
    pub fn is_column_playable(&self, col: usize) -> bool {
        col < W && self.cells[0][col] == Cell::Empty
    }

    /// Indices of the columns that still take a piece.
    pub fn playable_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..W).filter(|&col| self.is_column_playable(col))
    }

    /// `true` once no column is playable.
    pub fn is_full(&self) -> bool {
        self.playable_columns().next().is_none()
    }

    /// Number of pieces `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        let cell = Cell::from(player);
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// Check if `player` has four connected pieces.
    pub fn check_win(&self, player: Player) -> bool {
        self.winning_line(player).is_some()
    }

    /// Find four connected pieces of `player`.
    ///
    /// Slides a window of four cells over every start position on each axis
    /// and returns the first window fully owned by `player`.
    pub fn winning_line(&self, player: Player) -> Option<Line> {
        let target = Cell::from(player);
        for (dr, dc) in AXES {
            for row in 0..H {
                for col in 0..W {
                    let Some(line) = window(row, col, dr, dc) else {
                        continue;
                    };
                    if line.iter().all(|&(r, c)| self.cells[r][c] == target) {
                        return Some(line);
                    }
                }
            }
        }
        None
    }

    /// Evaluate the board from scratch.
    ///
    /// When both players own a line (only possible on hand built boards)
    /// player one is reported.
    pub fn outcome(&self) -> Outcome {
        if self.check_win(Player::One) {
            Outcome::PlayerOneWin
        } else if self.check_win(Player::Two) {
            Outcome::PlayerTwoWin
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }
}

/// Coordinates of the window starting at `(row, col)` stepping by `(dr, dc)`,
/// or `None` if it leaves the grid.
fn window(row: usize, col: usize, dr: isize, dc: isize) -> Option<Line> {
    let mut line = [(0, 0); CONNECT];
    for (k, slot) in line.iter_mut().enumerate() {
        let r = row.checked_add_signed(dr * k as isize)?;
        let c = col.checked_add_signed(dc * k as isize)?;
        if r >= H || c >= W {
            return None;
        }
        *slot = (r, c);
    }
    Some(line)
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Board {
    type Err = Error;

    /// Parse the `Display` form: `H` lines of `W` symbols, top row first.
    /// Blank lines and surrounding whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.len() != H {
            return Err(Error::InvalidBoard(format!(
                "expected {H} rows, found {}",
                lines.len()
            )));
        }

        let mut board = Self::new();
        for (row, line) in lines.iter().enumerate() {
            let symbols: Vec<char> = line.chars().collect();
            if symbols.len() != W {
                return Err(Error::InvalidBoard(format!(
                    "row {row} has {} cells, expected {W}",
                    symbols.len()
                )));
            }
            for (col, symbol) in symbols.into_iter().enumerate() {
                board.cells[row][col] = Cell::from_symbol(symbol).ok_or_else(|| {
                    Error::InvalidBoard(format!("unknown symbol {symbol:?} at row {row}"))
                })?;
            }
        }

        // gravity: nothing may sit above an empty cell
        for col in 0..W {
            for row in 1..H {
                if board.cells[row][col] == Cell::Empty && board.cells[row - 1][col] != Cell::Empty
                {
                    return Err(Error::InvalidBoard(format!(
                        "floating piece in column {} above row {row}",
                        col + 1
                    )));
                }
            }
        }

        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        for row in 0..H {
            for col in 0..W {
                assert_eq!(board.cell_at(row, col).unwrap(), Cell::Empty);
            }
        }
        assert_eq!(board.outcome(), Outcome::InProgress);
    }

    #[test]
    fn cell_at_out_of_range() {
        let board = Board::new();
        assert!(matches!(
            board.cell_at(H, 0),
            Err(Error::OutOfRange { row: 6, col: 0 })
        ));
        assert!(matches!(
            board.cell_at(0, W),
            Err(Error::OutOfRange { row: 0, col: 7 })
        ));
    }

    #[test]
    fn pieces_stack_from_the_bottom() {
        let mut board = Board::new();
        assert_eq!(board.drop_piece(3, Player::One).unwrap(), 5);
        assert_eq!(board.drop_piece(3, Player::Two).unwrap(), 4);
        assert_eq!(board.cell_at(5, 3).unwrap(), Cell::PlayerOne);
        assert_eq!(board.cell_at(4, 3).unwrap(), Cell::PlayerTwo);
        assert_eq!(board.cell_at(3, 3).unwrap(), Cell::Empty);
    }

    #[test]
    fn full_column_rejects_without_change() {
        let mut board = Board::new();
        for i in 0..H {
            let player = if i % 2 == 0 { Player::One } else { Player::Two };
            board.drop_piece(0, player).unwrap();
        }
        assert!(!board.is_column_playable(0));
        let before = board;
        assert!(matches!(
            board.drop_piece(0, Player::One),
            Err(Error::ColumnFull(0))
        ));
        assert_eq!(board, before);
    }

    #[test]
    fn drop_outside_board() {
        let mut board = Board::new();
        assert!(matches!(
            board.drop_piece(W, Player::One),
            Err(Error::OutOfRange { .. })
        ));
        assert!(!board.is_column_playable(W));
    }

    #[test]
    fn detects_each_axis() {
        let horizontal = board(
            "
            .......
            .......
            .......
            .......
            .XXX...
            .OOOO..
            ",
        );
        assert_eq!(
            horizontal.winning_line(Player::One),
            Some([(5, 1), (5, 2), (5, 3), (5, 4)])
        );
        assert!(!horizontal.check_win(Player::Two));

        let vertical = board(
            "
            .......
            .......
            ......X
            ......X
            OOO...X
            OOO...X
            ",
        );
        assert!(vertical.check_win(Player::Two));
        assert!(!vertical.check_win(Player::One));

        let down_right = board(
            "
            .......
            .......
            O......
            XO.....
            XXO....
            OXXO...
            ",
        );
        assert_eq!(
            down_right.winning_line(Player::One),
            Some([(2, 0), (3, 1), (4, 2), (5, 3)])
        );

        let down_left = board(
            "
            .......
            .......
            ......X
            .....XO
            ....XOO
            ...XOOO
            ",
        );
        assert_eq!(
            down_left.winning_line(Player::Two),
            Some([(2, 6), (3, 5), (4, 4), (5, 3)])
        );
    }

    #[test]
    fn three_in_a_row_is_not_a_win() {
        let board = board(
            "
            .......
            .......
            .......
            O......
            OX.....
            OXXX...
            ",
        );
        assert!(!board.check_win(Player::One));
        assert!(!board.check_win(Player::Two));
    }

    #[test]
    fn full_board_without_line_is_draw() {
        let board = board(
            "
            OOXXOOX
            XXOOXXO
            OOXXOOX
            XXOOXXO
            OOXXOOX
            XXOOXXO
            ",
        );
        assert!(board.is_full());
        assert_eq!(board.outcome(), Outcome::Draw);
    }

    #[test]
    fn display_round_trips() {
        let mut board = Board::new();
        board.drop_piece(2, Player::One).unwrap();
        board.drop_piece(2, Player::Two).unwrap();
        let text = board.to_string();
        assert!(text.ends_with("..X....\n..O....\n"));
        assert_eq!(text.parse::<Board>().unwrap(), board);
    }

    #[test]
    fn rejects_floating_pieces() {
        let err = "
            .......
            .......
            .......
            ...O...
            .......
            .......
            "
        .parse::<Board>()
        .unwrap_err();
        assert!(matches!(err, Error::InvalidBoard(_)));
    }

    #[test]
    fn rejects_bad_shape() {
        assert!(matches!(
            "OX\nXO".parse::<Board>(),
            Err(Error::InvalidBoard(_))
        ));
    }
}
