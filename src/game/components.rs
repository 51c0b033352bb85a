use crate::{
    config::{BOARD_WIDTH, EMPTY_SYMBOL, PLAYER_ONE_SYMBOL, PLAYER_TWO_SYMBOL},
    game::error::{Error, GameResult},
};

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Moves first, plays `O`.
    One,
    /// Plays `X`; the AI seat in [Mode::HumanVsAgent].
    Two,
}

impl Player {
    /// The player moving after this one.
    pub fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Symbol drawn on the board for this player's pieces.
    pub fn symbol(self) -> char {
        match self {
            Self::One => PLAYER_ONE_SYMBOL,
            Self::Two => PLAYER_TWO_SYMBOL,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.symbol())
    }
}

/// The state of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// No piece.
    #[default]
    Empty,
    /// Holds a piece of [Player::One].
    PlayerOne,
    /// Holds a piece of [Player::Two].
    PlayerTwo,
}

impl Cell {
    /// The player owning the piece in this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::PlayerOne => Some(Player::One),
            Self::PlayerTwo => Some(Player::Two),
        }
    }

    /// Symbol used for this cell in the text form of a board.
    pub fn symbol(self) -> char {
        self.player().map_or(EMPTY_SYMBOL, Player::symbol)
    }

    pub(crate) fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            EMPTY_SYMBOL => Some(Self::Empty),
            PLAYER_ONE_SYMBOL => Some(Self::PlayerOne),
            PLAYER_TWO_SYMBOL => Some(Self::PlayerTwo),
            _ => None,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::One => Self::PlayerOne,
            Player::Two => Self::PlayerTwo,
        }
    }
}

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player one has four in a row.
    PlayerOneWin,
    /// Player two has four in a row.
    PlayerTwoWin,
    /// Board full without a line of four.
    Draw,
    /// No line of four and moves are left.
    InProgress,
}

impl Outcome {
    /// The winning outcome for `player`.
    pub fn win(player: Player) -> Self {
        match player {
            Player::One => Self::PlayerOneWin,
            Player::Two => Self::PlayerTwoWin,
        }
    }

    /// The player who won, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Self::PlayerOneWin => Some(Player::One),
            Self::PlayerTwoWin => Some(Player::Two),
            Self::Draw | Self::InProgress => None,
        }
    }

    /// `true` for a win or a draw.
    pub fn is_terminal(self) -> bool {
        self != Self::InProgress
    }
}

/// A column selection, stored zero indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Column(usize);

impl Column {
    /// Build a column from a zero based index.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidColumn` (carrying the one based label) if the
    /// index is outside the board.
    pub fn from_index(index: usize) -> GameResult<Self> {
        if index >= BOARD_WIDTH {
            return Err(Error::InvalidColumn(index.saturating_add(1)));
        }
        Ok(Self(index))
    }

    /// Build a column from the one based label shown to the user.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidColumn` if the label is not in `1..=7`.
    pub fn from_label(label: usize) -> GameResult<Self> {
        if label < 1 || label > BOARD_WIDTH {
            return Err(Error::InvalidColumn(label));
        }
        Ok(Self(label - 1))
    }

    /// Zero based index into the board.
    pub fn index(self) -> usize {
        self.0
    }

    /// One based number shown to the user.
    pub fn label(self) -> usize {
        self.0 + 1
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The two session types offered by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Player one is human, player two is the random agent.
    HumanVsAgent,
    /// Both players are human and share the keyboard.
    HumanVsHuman,
}

/// Who provides the moves for a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    /// Moves come from the keyboard.
    Human,
    /// Moves come from the random agent.
    Agent,
}

impl Mode {
    /// Who moves for `player` in this mode.
    pub fn seat(self, player: Player) -> Seat {
        match (self, player) {
            (Self::HumanVsAgent, Player::Two) => Seat::Agent,
            _ => Seat::Human,
        }
    }
}

/// Turn controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Waiting for a move by the given player.
    AwaitingMove(Player),
    /// Finished; no more moves are accepted.
    GameOver(Outcome),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn players_alternate() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other().other(), Player::Two);
    }

    #[test]
    fn column_labels_are_one_based() {
        let col = Column::from_label(1).unwrap();
        assert_eq!(col.index(), 0);
        assert_eq!(Column::from_label(7).unwrap().index(), 6);
        assert!(matches!(Column::from_label(0), Err(Error::InvalidColumn(0))));
        assert!(matches!(Column::from_label(8), Err(Error::InvalidColumn(8))));
        assert!(matches!(Column::from_index(7), Err(Error::InvalidColumn(8))));
    }

    #[test]
    fn huge_index_is_an_error() {
        assert!(matches!(
            Column::from_index(usize::MAX),
            Err(Error::InvalidColumn(usize::MAX))
        ));
        assert!(matches!(
            Column::from_label(usize::MAX),
            Err(Error::InvalidColumn(usize::MAX))
        ));
    }

    #[test]
    fn agent_only_sits_in_slot_two() {
        assert_eq!(Mode::HumanVsAgent.seat(Player::One), Seat::Human);
        assert_eq!(Mode::HumanVsAgent.seat(Player::Two), Seat::Agent);
        assert_eq!(Mode::HumanVsHuman.seat(Player::Two), Seat::Human);
    }

    #[test]
    fn cell_symbols() {
        assert_eq!(Cell::from(Player::One).symbol(), 'O');
        assert_eq!(Cell::from(Player::Two).symbol(), 'X');
        assert_eq!(Cell::Empty.symbol(), '.');
        assert_eq!(Cell::from_symbol('X'), Some(Cell::PlayerTwo));
        assert_eq!(Cell::from_symbol('?'), None);
    }
}
