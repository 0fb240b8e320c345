//! Line-oriented console I/O for the game.
//!
//! Generic over the reader and writer so sessions can be scripted in tests.

use crate::layout::Layout;
use crate::scoreboard::{RoundResult, Scoreboard};
use crossterm::style::Stylize;
use derive_more::{Display, Error, From};
use std::io::{BufRead, Write};
use tictactoe_engine::{Board, Move};
use tracing::{debug, instrument};

const BANNER_WIDTH: usize = 65;

/// Console I/O failure.
#[derive(Debug, Display, Error, From)]
#[display("Console I/O failed")]
pub struct ConsoleError {
    /// Underlying I/O error.
    source: std::io::Error,
}

/// What the player typed at the move prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveInput {
    /// A digit that maps to a cell.
    Cell(Move),
    /// Anything else, including end of input. Ends the session.
    Terminate,
}

/// Prompts and board output over a reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console. `color` enables styled result messages.
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    /// Reads one line without its terminator. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, ConsoleError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt(&mut self, text: &str) -> Result<(), ConsoleError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Prints the instructions banner and the coordinate legend.
    #[instrument(skip(self))]
    pub fn show_instructions(&mut self, layout: Layout) -> Result<(), ConsoleError> {
        let rule = "+".repeat(BANNER_WIDTH);
        let lines = [
            "Board coordinates to set your symbol",
            "Enter the coordinate and press enter/return to make your move",
            "To end the game input any other character apart from 1-9",
        ];
        writeln!(self.output)?;
        writeln!(self.output, "{}", rule)?;
        for line in lines {
            writeln!(self.output, "+ {:<width$} +", line, width = BANNER_WIDTH - 4)?;
        }
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output)?;
        writeln!(self.output, "Board coordinates:")?;
        write!(self.output, "{}", layout.legend())?;
        writeln!(self.output)?;
        Ok(())
    }

    /// Asks for a one-character token until one is given.
    ///
    /// Entries equal to `reserved` or `0` are refused as well. Returns `None`
    /// at end of input.
    #[instrument(skip(self))]
    pub fn prompt_symbol(&mut self, reserved: char) -> Result<Option<char>, ConsoleError> {
        loop {
            self.prompt("Enter your symbol (one character): ")?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            let mut chars = line.trim().chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c != reserved && c != '0' => {
                    debug!(symbol = %c, "Symbol chosen");
                    return Ok(Some(c));
                }
                _ => debug!(input = %line, "Rejected symbol"),
            }
        }
    }

    /// Reads one move. Malformed or out-of-range input yields
    /// [`MoveInput::Terminate`].
    #[instrument(skip(self))]
    pub fn prompt_move(&mut self, layout: Layout) -> Result<MoveInput, ConsoleError> {
        self.prompt("Your input: ")?;
        let Some(line) = self.read_line()? else {
            debug!("End of input");
            return Ok(MoveInput::Terminate);
        };
        let token = line.split_whitespace().next().unwrap_or_default();
        let input = token
            .parse::<u32>()
            .ok()
            .and_then(|n| layout.to_move(n))
            .map_or(MoveInput::Terminate, MoveInput::Cell);
        debug!(input = %line, parsed = ?input, "Move input read");
        Ok(input)
    }

    /// Prints the round header.
    pub fn show_round(&mut self, round: u32) -> Result<(), ConsoleError> {
        writeln!(self.output, "*** ROUND {} ***", round)?;
        Ok(())
    }

    /// Prints the board with the given tokens.
    pub fn show_board(
        &mut self,
        board: &Board,
        computer_token: char,
        human_token: char,
    ) -> Result<(), ConsoleError> {
        let rendered = board.render(
            computer_token.encode_utf8(&mut [0; 4]),
            human_token.encode_utf8(&mut [0; 4]),
        );
        write!(self.output, "{}", rendered)?;
        Ok(())
    }

    /// Prints the end-of-round message.
    pub fn show_result(&mut self, result: RoundResult) -> Result<(), ConsoleError> {
        let message = result.message();
        if self.color {
            let styled = match result {
                RoundResult::Win => message.green().bold(),
                RoundResult::Lose => message.red().bold(),
                RoundResult::Tie => message.yellow().bold(),
            };
            writeln!(self.output, "{}", styled)?;
        } else {
            writeln!(self.output, "{}", message)?;
        }
        Ok(())
    }

    /// Prints the termination notice.
    pub fn show_terminated(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.output)?;
        writeln!(self.output, "Game terminated")?;
        Ok(())
    }

    /// Prints the session tally.
    pub fn show_scoreboard(&mut self, scoreboard: &Scoreboard) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", scoreboard)?;
        self.output.flush()?;
        Ok(())
    }

    /// Consumes the console, returning the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false)
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_inner().1).unwrap()
    }

    #[test]
    fn test_console_error_keeps_io_error_as_source() {
        use std::error::Error as _;
        let err = ConsoleError::from(std::io::Error::other("pipe closed"));
        assert_eq!(err.to_string(), "Console I/O failed");
        assert_eq!(err.source().map(|e| e.to_string()), Some("pipe closed".to_string()));
    }

    #[test]
    fn test_prompt_symbol_retries_until_single_char() {
        let mut console = console("\nab\n*\n0\nx\n");
        assert_eq!(console.prompt_symbol('*').unwrap(), Some('x'));
        let text = output(console);
        assert_eq!(text.matches("Enter your symbol").count(), 5);
    }

    #[test]
    fn test_prompt_symbol_accepts_multibyte_char() {
        let mut console = console("é\n");
        assert_eq!(console.prompt_symbol('*').unwrap(), Some('é'));
    }

    #[test]
    fn test_prompt_symbol_end_of_input() {
        let mut console = console("ab\n");
        assert_eq!(console.prompt_symbol('*').unwrap(), None);
    }

    #[test]
    fn test_prompt_move_parses_digit() {
        let mut console = console(" 6 \n");
        assert_eq!(
            console.prompt_move(Layout::RowMajor).unwrap(),
            MoveInput::Cell(Move::new(1, 2))
        );
        assert_eq!(output(console), "Your input: ");
    }

    #[test]
    fn test_prompt_move_terminates_on_garbage() {
        for input in ["q\n", "0\n", "10\n", "-1\n", "\n", ""] {
            let mut console = console(input);
            assert_eq!(
                console.prompt_move(Layout::Keypad).unwrap(),
                MoveInput::Terminate,
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_show_result_plain() {
        let mut console = console("");
        console.show_result(RoundResult::Lose).unwrap();
        assert_eq!(output(console), "-_-_- You lose -_-_-\n");
    }

    #[test]
    fn test_show_result_colored_contains_message() {
        let mut console = Console::new(Cursor::new(Vec::new()), Vec::new(), true);
        console.show_result(RoundResult::Win).unwrap();
        let text = String::from_utf8(console.into_inner().1).unwrap();
        assert!(text.contains("-_-_- You win -_-_-"));
        assert!(text.contains('\u{1b}'));
    }

    #[test]
    fn test_instructions_include_legend() {
        let mut console = console("");
        console.show_instructions(Layout::Keypad).unwrap();
        let text = output(console);
        assert!(text.contains("Board coordinates:\n7  8  9\n4  5  6\n1  2  3\n"));
        for line in text.lines().filter(|l| l.starts_with('+')) {
            assert_eq!(line.chars().count(), BANNER_WIDTH);
        }
    }
}
