use std::io::{self, Stdout, Write};

use crate::{
    config::{BOARD_HEIGHT, BOARD_WIDTH, NO_COLOR_ENV},
    console::menu::Tally,
    game::{
        Board, Column, Error, Frame, GameResult, Line, Mode, Outcome, Player, Renderer, Seat,
        State,
    },
};

const CLEAR: &str = "\x1b[2J\x1b[H";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Paint {
    Frame,
    PlayerOne,
    PlayerTwo,
    Label,
}

impl Paint {
    fn code(self) -> &'static str {
        match self {
            Self::Frame => "33",
            Self::PlayerOne => "31",
            Self::PlayerTwo => "34",
            Self::Label => "32",
        }
    }

    fn player(player: Player) -> Self {
        match player {
            Player::One => Self::PlayerOne,
            Player::Two => Self::PlayerTwo,
        }
    }
}

/// Text renderer. Every frame is drawn from the snapshot alone.
#[derive(Debug)]
pub struct Screen<W> {
    out: W,
    color: bool,
    clear: bool,
}

impl Screen<Stdout> {
    /// Render to stdout, clearing the terminal before every frame. Colour is
    /// on unless `NO_COLOR` is set.
    pub fn stdout() -> Self {
        Self::new(io::stdout(), std::env::var_os(NO_COLOR_ENV).is_none()).clearing(true)
    }
}

impl<W: Write> Screen<W> {
    /// Render to `out`, with or without ANSI colours. The screen is not
    /// cleared between frames unless [Screen::clearing] turns it on.
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            clear: false,
        }
    }

    /// Clear the terminal before each frame and before the menu.
    pub fn clearing(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    /// Give back the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, paint: Paint) -> String {
        if self.color {
            format!("\x1b[{}m{text}\x1b[0m", paint.code())
        } else {
            text.to_string()
        }
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.clear {
            write!(self.out, "{CLEAR}")?;
        }
        Ok(())
    }

    fn border(&mut self) -> io::Result<()> {
        let line = self.paint(&format!("{}+", "+---".repeat(BOARD_WIDTH)), Paint::Frame);
        writeln!(self.out, "{line}")
    }

    fn draw_board(&mut self, board: &Board, highlight: Option<Line>) -> io::Result<()> {
        let bar = self.paint("|", Paint::Frame);
        self.border()?;
        for (row, cells) in board.rows().iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let symbol = match cell.player() {
                    Some(player) => {
                        let won = highlight.map_or(false, |line| line.contains(&(row, col)));
                        let text = self.paint(&player.symbol().to_string(), Paint::player(player));
                        if won && self.color {
                            format!("\x1b[7m{text}")
                        } else {
                            text
                        }
                    }
                    None => " ".to_string(),
                };
                write!(self.out, "{bar} {symbol} ")?;
            }
            writeln!(self.out, "{bar}")?;
            self.border()?;
        }
        for col in 1..=BOARD_WIDTH {
            let label = self.paint(&format!("  {col} "), Paint::Label);
            write!(self.out, "{label}")?;
        }
        writeln!(self.out)?;
        writeln!(self.out)
    }

    fn prompt(&mut self) -> io::Result<()> {
        write!(
            self.out,
            "Enter a column (1-{BOARD_WIDTH}) to place your piece: "
        )?;
        self.out.flush()
    }

    fn banner(&mut self, outcome: Outcome, mode: Mode) -> io::Result<()> {
        let text = match outcome.winner() {
            Some(player) if mode.seat(player) == Seat::Agent => {
                self.paint("AI wins!", Paint::player(player))
            }
            Some(player) => self.paint(&format!("{player} wins!"), Paint::player(player)),
            None if outcome == Outcome::Draw => "Tie game!".to_string(),
            None => return Ok(()),
        };
        writeln!(self.out, "{text}")
    }

    /// Draw the start menu.
    pub fn menu(&mut self, tally: &Tally) -> GameResult<()> {
        self.clear()?;
        writeln!(self.out, "Welcome to Connect 4!\n")?;
        writeln!(self.out, "How to play:\n")?;
        writeln!(
            self.out,
            "Type a number from 1 to {BOARD_WIDTH} and press Enter to drop a piece into that column."
        )?;
        writeln!(
            self.out,
            "Pieces fall to the lowest free cell. Connect four of your own to win:"
        )?;
        writeln!(self.out, "\t vertically\n\t horizontally\n\t diagonally\n")?;
        writeln!(
            self.out,
            "If all {} cells fill up without a line of four, the game is a tie.\n",
            BOARD_WIDTH * BOARD_HEIGHT
        )?;
        if tally.games() > 0 {
            writeln!(self.out, "{tally}\n")?;
        }
        writeln!(self.out, "SELECT GAME MODE:")?;
        writeln!(self.out, "1. Play vs AI")?;
        writeln!(self.out, "2. Play vs another player\n")?;
        write!(self.out, "Type 'q' to exit the game: ")?;
        self.out.flush()?;
        Ok(())
    }

    /// Ask for Enter after a finished game.
    pub fn return_prompt(&mut self) -> GameResult<()> {
        write!(self.out, "Press Enter to return to the menu...")?;
        self.out.flush()?;
        Ok(())
    }

    /// Final score and goodbye when the session ends.
    pub fn farewell(&mut self, tally: &Tally) -> GameResult<()> {
        writeln!(self.out)?;
        if tally.games() > 0 {
            writeln!(self.out, "{tally}")?;
        }
        writeln!(self.out, "Goodbye!")?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Renderer for Screen<W> {
    fn render(&mut self, frame: &Frame<'_>) -> GameResult<()> {
        self.clear()?;

        let highlight = match frame.state {
            State::GameOver(outcome) => outcome
                .winner()
                .and_then(|player| frame.board.winning_line(player)),
            State::AwaitingMove(_) => None,
        };
        self.draw_board(frame.board, highlight)?;

        if let Some(last) = frame.last_move {
            if last.seat == Seat::Agent {
                writeln!(self.out, "AI placed in column {}", last.col)?;
            }
        }

        match frame.state {
            State::AwaitingMove(player) => {
                let turn = self.paint(&format!("{player}'s turn"), Paint::player(player));
                writeln!(self.out, "{turn}")?;
                if frame.mode.seat(player) == Seat::Human {
                    self.prompt()?;
                }
            }
            State::GameOver(outcome) => self.banner(outcome, frame.mode)?,
        }
        self.out.flush()?;
        Ok(())
    }

    fn rejected(&mut self, _player: Player, col: Column, _err: &Error) -> GameResult<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Column {col} is already full!")?;
        self.prompt()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;

    fn render(game: &Game) -> String {
        let mut screen = Screen::new(Vec::new(), false);
        screen.render(&game.frame()).unwrap();
        String::from_utf8(screen.into_inner()).unwrap()
    }

    #[test]
    fn draws_an_empty_board() {
        let text = render(&Game::new(Mode::HumanVsHuman));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "+---+---+---+---+---+---+---+");
        assert_eq!(lines[1], "|   |   |   |   |   |   |   |");
        assert_eq!(lines[12], "+---+---+---+---+---+---+---+");
        assert_eq!(lines[13], "  1   2   3   4   5   6   7 ");
        assert!(text.contains("Player O's turn"));
        assert!(text.ends_with("Enter a column (1-7) to place your piece: "));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn shows_pieces_and_agent_moves() {
        let mut game = Game::new(Mode::HumanVsAgent);
        game.submit(Column::from_label(1).unwrap()).unwrap();
        game.submit(Column::from_label(2).unwrap()).unwrap();
        let text = render(&game);
        assert!(text.contains("| O | X |   |"));
        assert!(text.contains("AI placed in column 2"));
    }

    #[test]
    fn agent_turn_has_no_prompt() {
        let mut game = Game::new(Mode::HumanVsAgent);
        game.submit(Column::from_label(4).unwrap()).unwrap();
        let text = render(&game);
        assert!(text.contains("Player X's turn"));
        assert!(!text.contains("Enter a column"));
    }

    #[test]
    fn banners() {
        let win: Board = "
            .......
            .......
            X......
            XO.....
            XO.....
            XO....O
            "
        .parse()
        .unwrap();
        assert!(render(&Game::from_board(Mode::HumanVsAgent, win)).contains("AI wins!"));
        assert!(render(&Game::from_board(Mode::HumanVsHuman, win)).contains("Player X wins!"));

        let draw: Board = "
            OOXXOOX
            XXOOXXO
            OOXXOOX
            XXOOXXO
            OOXXOOX
            XXOOXXO
            "
        .parse()
        .unwrap();
        assert!(render(&Game::from_board(Mode::HumanVsHuman, draw)).contains("Tie game!"));
    }

    #[test]
    fn colour_highlights_the_winning_line() {
        let win: Board = "
            .......
            .......
            O......
            OX.....
            OX.....
            OX.....
            "
        .parse()
        .unwrap();
        let mut screen = Screen::new(Vec::new(), true);
        screen
            .render(&Game::from_board(Mode::HumanVsHuman, win).frame())
            .unwrap();
        let text = String::from_utf8(screen.into_inner()).unwrap();
        assert!(!text.starts_with(CLEAR));
        assert_eq!(text.matches("\x1b[7m").count(), 4);
    }

    #[test]
    fn clearing_works_without_colour() {
        let game = Game::new(Mode::HumanVsHuman);
        let mut screen = Screen::new(Vec::new(), false).clearing(true);
        screen.render(&game.frame()).unwrap();
        screen.menu(&Tally::default()).unwrap();
        let text = String::from_utf8(screen.into_inner()).unwrap();
        assert!(text.starts_with(CLEAR));
        assert_eq!(text.matches(CLEAR).count(), 2);
        assert_eq!(text.matches('\x1b').count(), 2 * CLEAR.matches('\x1b').count());
    }

    #[test]
    fn rejection_message() {
        let mut screen = Screen::new(Vec::new(), false);
        let col = Column::from_label(3).unwrap();
        screen
            .rejected(Player::One, col, &Error::ColumnFull(2))
            .unwrap();
        let text = String::from_utf8(screen.into_inner()).unwrap();
        assert!(text.contains("Column 3 is already full!"));
    }
}
