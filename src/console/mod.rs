//! Terminal front end: keyboard input, board drawing and the menu loop.
mod input;
mod menu;
mod view;

use std::io::{BufRead, Write};

use crate::game::{Error, Game, GameResult, MoveSource};

pub use input::{Input, Keyboard};
pub use menu::{select_mode, MenuChoice, Tally};
pub use view::Screen;

/// Run games until the player quits or input ends.
///
/// Each game is played to completion and its outcome recorded before the
/// menu is shown again.
pub fn run<R, W, A>(
    keyboard: &mut Keyboard<R>,
    screen: &mut Screen<W>,
    agent: &mut A,
) -> GameResult<Tally>
where
    R: BufRead,
    W: Write,
    A: MoveSource + ?Sized,
{
    let mut tally = Tally::default();
    loop {
        let mode = match select_mode(keyboard, screen, &tally) {
            Ok(MenuChoice::Play(mode)) => mode,
            Ok(MenuChoice::Quit) | Err(Error::Quit | Error::InputClosed) => break,
            Err(e) => return Err(e),
        };

        let mut game = Game::new(mode);
        match game.play(keyboard, agent, screen) {
            Ok(outcome) => {
                tally.record(outcome);
                log::info!("{outcome:?}, {tally}");
            }
            Err(Error::Quit | Error::InputClosed) => break,
            Err(e) => return Err(e),
        }

        screen.return_prompt()?;
        match keyboard.wait_for_enter() {
            Ok(()) => (),
            Err(Error::InputClosed) => break,
            Err(e) => return Err(e),
        }
    }
    screen.farewell(&tally)?;
    Ok(tally)
}
