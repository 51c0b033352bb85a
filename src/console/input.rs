use std::io::{BufRead, StdinLock};

use crate::game::{Board, Column, Error, GameResult, MoveSource, Player};

/// The different types of input the console understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A number, column label or menu entry.
    Col(usize),
    /// An empty line.
    Enter,
    /// `q`, `quit`, `exit`, `stop` or `e`.
    Quit,
    /// `help`, `h` or `?`.
    Help,
}

impl std::str::FromStr for Input {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().trim() {
            "" => Ok(Self::Enter),
            "stop" | "exit" | "quit" | "q" | "e" => Ok(Self::Quit),
            "help" | "h" | "?" => Ok(Self::Help),
            other => other
                .parse::<usize>()
                .map(Self::Col)
                .map_err(|_| Error::InvalidInput(other.to_string())),
        }
    }
}

/// Line based keyboard input.
#[derive(Debug)]
pub struct Keyboard<R> {
    reader: R,
    buf: String,
}

impl Keyboard<StdinLock<'static>> {
    /// Read from the process' standard input.
    pub fn stdin() -> Self {
        Self::new(std::io::stdin().lock())
    }
}

impl<R: BufRead> Keyboard<R> {
    /// Read lines from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
        }
    }

    /// Read and parse one line.
    ///
    /// # Errors
    ///
    /// Returns `Error::InputClosed` at end of input and `Error::InvalidInput`
    /// for a line that is not a command or a number.
    pub fn read(&mut self) -> GameResult<Input> {
        self.buf.clear();
        if self.reader.read_line(&mut self.buf)? == 0 {
            return Err(Error::InputClosed);
        }
        let input = self.buf.parse();
        log::trace!("input {:?} -> {input:?}", self.buf.trim_end());
        input
    }

    /// Block until any line is entered.
    pub fn wait_for_enter(&mut self) -> GameResult<()> {
        match self.read() {
            Ok(_) | Err(Error::InvalidInput(_)) => Ok(()),
            Err(e) => Err(e),
        }
    }
}

impl<R: BufRead> MoveSource for Keyboard<R> {
    /// Keeps reading until a column label between 1 and 7 arrives; anything
    /// else except a quit command is ignored.
    fn next_move(&mut self, _board: &Board, player: Player) -> GameResult<Column> {
        loop {
            match self.read() {
                Ok(Input::Col(label)) => match Column::from_label(label) {
                    Ok(col) => return Ok(col),
                    Err(e) => log::debug!("{player}: {e}"),
                },
                Ok(Input::Quit) => return Err(Error::Quit),
                Ok(_) | Err(Error::InvalidInput(_)) => (),
                Err(e) => return Err(e),
            }
        }
    }
}
