use crate::game::{
    board::Board,
    components::{Column, Mode, Outcome, Player, Seat, State},
    error::{Error, GameResult},
};

/// Anything able to pick a column for the player to move.
pub trait MoveSource {
    /// Block until a column is chosen for `player`.
    ///
    /// The column only has to be on the board; whether it is playable is
    /// checked by the [Game].
    fn next_move(&mut self, board: &Board, player: Player) -> GameResult<Column>;
}

/// Receives a snapshot after every state change.
pub trait Renderer {
    /// Draw the current board and state.
    fn render(&mut self, frame: &Frame<'_>) -> GameResult<()>;

    /// A human move was refused and the same player is asked again.
    fn rejected(&mut self, player: Player, col: Column, err: &Error) -> GameResult<()>;
}

/// The last piece placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Owner of the piece.
    pub player: Player,
    /// Who chose the move.
    pub seat: Seat,
    /// Row the piece landed in.
    pub row: usize,
    /// Column the piece was dropped into.
    pub col: Column,
}

/// Immutable view of a game handed to a [Renderer].
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Board after the last accepted move.
    pub board: &'a Board,
    /// Controller state, including the outcome once the game is over.
    pub state: State,
    /// Session type, used to tell the AI seat apart.
    pub mode: Mode,
    /// The piece placed by the move that led to this frame.
    pub last_move: Option<Placement>,
}

/// Turn controller for a single game.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    state: State,
    mode: Mode,
    last_move: Option<Placement>,
}

impl Game {
    /// Start a game on an empty board with player one to move.
    pub fn new(mode: Mode) -> Self {
        Self {
            board: Board::new(),
            state: State::AwaitingMove(Player::One),
            mode,
            last_move: None,
        }
    }

    /// Continue from an existing position.
    ///
    /// Player one moves when both players have the same number of pieces,
    /// otherwise player two. A finished position starts in `GameOver`.
    pub fn from_board(mode: Mode, board: Board) -> Self {
        let state = match board.outcome() {
            Outcome::InProgress if board.count(Player::One) == board.count(Player::Two) => {
                State::AwaitingMove(Player::One)
            }
            Outcome::InProgress => State::AwaitingMove(Player::Two),
            outcome => State::GameOver(outcome),
        };
        Self {
            board,
            state,
            mode,
            last_move: None,
        }
    }

    /// The current position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current controller state.
    pub fn state(&self) -> State {
        self.state
    }

    /// The session type this game was started with.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The most recent accepted move.
    pub fn last_move(&self) -> Option<Placement> {
        self.last_move
    }

    /// The player to move, or `None` once the game is over.
    pub fn active_player(&self) -> Option<Player> {
        match self.state {
            State::AwaitingMove(player) => Some(player),
            State::GameOver(_) => None,
        }
    }

    /// Snapshot for a [Renderer].
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            board: &self.board,
            state: self.state,
            mode: self.mode,
            last_move: self.last_move,
        }
    }

    /// Play `col` for the active player.
    ///
    /// # Errors
    ///
    /// Returns `Error::ColumnFull` if the column is not playable. The state is
    /// unchanged and the same player is still to move.
    ///
    /// Returns `Error::GameOver` if the game has already ended.
    pub fn submit(&mut self, col: Column) -> GameResult<State> {
        let player = match self.state {
            State::AwaitingMove(player) => player,
            State::GameOver(_) => return Err(Error::GameOver),
        };

        if !self.board.is_column_playable(col.index()) {
            log::debug!("{player}: column {col} is full, move rejected");
            return Err(Error::ColumnFull(col.index()));
        }

        let row = self.board.drop_piece(col.index(), player)?;
        self.last_move = Some(Placement {
            player,
            seat: self.mode.seat(player),
            row,
            col,
        });
        log::trace!("board after {player} in column {col}:\n{}", self.board);

        self.state = if self.board.check_win(player) {
            State::GameOver(Outcome::win(player))
        } else if self.board.is_full() {
            State::GameOver(Outcome::Draw)
        } else {
            State::AwaitingMove(player.other())
        };
        log::debug!("state: {:?}", self.state);

        Ok(self.state)
    }

    /// Run the game to the end.
    ///
    /// Human seats take their moves from `human`, the agent seat (player two
    /// in [Mode::HumanVsAgent]) from `agent`. Moves into a full column are
    /// refused and the same source is asked again.
    ///
    /// # Errors
    ///
    /// Any error from a move source or the renderer ends the game early, for
    /// example `Error::Quit` when a player leaves.
    pub fn play<H, A, V>(&mut self, human: &mut H, agent: &mut A, view: &mut V) -> GameResult<Outcome>
    where
        H: MoveSource + ?Sized,
        A: MoveSource + ?Sized,
        V: Renderer + ?Sized,
    {
        log::info!("starting {:?} game", self.mode);
        loop {
            view.render(&self.frame())?;

            let player = match self.state {
                State::AwaitingMove(player) => player,
                State::GameOver(outcome) => {
                    log::info!("game over: {outcome:?}");
                    return Ok(outcome);
                }
            };

            let seat = self.mode.seat(player);
            loop {
                let col = match seat {
                    Seat::Human => human.next_move(&self.board, player)?,
                    Seat::Agent => agent.next_move(&self.board, player)?,
                };
                match self.submit(col) {
                    Ok(_) => break,
                    Err(err @ Error::ColumnFull(_)) => {
                        if seat == Seat::Human {
                            view.rejected(player, col, &err)?;
                        }
                    }
                    Err(err) => return Err(err),
                }
            }
        }
    }
}
