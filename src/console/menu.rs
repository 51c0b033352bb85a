use std::io::{BufRead, Write};

use crate::{
    config::{PLAYER_ONE_SYMBOL, PLAYER_TWO_SYMBOL},
    console::{
        input::{Input, Keyboard},
        view::Screen,
    },
    game::{Error, GameResult, Mode, Outcome},
};

/// What the player picked on the start menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Start a game in the given mode.
    Play(Mode),
    /// Leave the program.
    Quit,
}

/// Results of the games played since the program started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Games won by player one.
    pub player_one: usize,
    /// Games won by player two.
    pub player_two: usize,
    /// Games ending in a tie.
    pub draws: usize,
}

impl Tally {
    /// Count a finished game. `InProgress` is ignored.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerOneWin => self.player_one += 1,
            Outcome::PlayerTwoWin => self.player_two += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => (),
        }
    }

    /// Number of finished games.
    pub fn games(&self) -> usize {
        self.player_one + self.player_two + self.draws
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Score: {PLAYER_ONE_SYMBOL} {}  {PLAYER_TWO_SYMBOL} {}  ties {}",
            self.player_one, self.player_two, self.draws
        )
    }
}

/// Show the menu and wait for a valid choice.
pub fn select_mode<R: BufRead, W: Write>(
    keyboard: &mut Keyboard<R>,
    screen: &mut Screen<W>,
    tally: &Tally,
) -> GameResult<MenuChoice> {
    screen.menu(tally)?;
    loop {
        match keyboard.read() {
            Ok(Input::Col(1)) => return Ok(MenuChoice::Play(Mode::HumanVsAgent)),
            Ok(Input::Col(2)) => return Ok(MenuChoice::Play(Mode::HumanVsHuman)),
            Ok(Input::Quit) => return Ok(MenuChoice::Quit),
            Ok(Input::Help) => screen.menu(tally)?,
            Ok(_) | Err(Error::InvalidInput(_)) => (),
            Err(e) => return Err(e),
        }
    }
}
