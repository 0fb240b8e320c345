//! Round and turn orchestration between the human and the engine.

use crate::config::GameConfig;
use crate::console::{Console, ConsoleError, MoveInput};
use crate::scoreboard::{RoundResult, Scoreboard};
use crate::seat::Seat;
use std::io::{BufRead, Write};
use tictactoe_engine::{evaluate, find_best_move, reset, Board, GameOutcome};
use tracing::{debug, error, info, instrument};

/// Where a round currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Waiting for the human to type a cell.
    AwaitingHumanMove,
    /// The engine is about to search for its move.
    AwaitingComputerMove,
    /// The board reached a terminal outcome.
    RoundOver(GameOutcome),
}

impl TurnState {
    /// Awaiting state for whoever moves next.
    pub fn awaiting(seat: Seat) -> Self {
        match seat {
            Seat::Human => TurnState::AwaitingHumanMove,
            Seat::Computer => TurnState::AwaitingComputerMove,
        }
    }
}

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player entered something other than a valid cell number.
    Terminated,
    /// The configured number of rounds was played.
    RoundLimit,
}

/// Owns the board and drives rounds until the session ends.
pub struct TurnController<R, W> {
    board: Board,
    console: Console<R, W>,
    config: GameConfig,
    opener: Seat,
    round: u32,
    scoreboard: Scoreboard,
}

impl<R: BufRead, W: Write> TurnController<R, W> {
    /// Creates a controller with an empty board.
    pub fn new(console: Console<R, W>, config: GameConfig) -> Self {
        let opener = *config.first_player();
        Self {
            board: Board::new(),
            console,
            config,
            opener,
            round: 1,
            scoreboard: Scoreboard::new(),
        }
    }

    /// Plays rounds until the player quits or the round limit is hit.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<SessionEnd, ConsoleError> {
        self.console.show_instructions(*self.config.layout())?;

        let human_token = match *self.config.symbol() {
            Some(symbol) => symbol,
            None => match self.console.prompt_symbol(*self.config.computer_token())? {
                Some(symbol) => symbol,
                None => return self.terminate(),
            },
        };

        loop {
            if let Some(limit) = *self.config.max_rounds()
                && self.scoreboard.rounds() >= limit
            {
                info!(limit, "Round limit reached");
                self.console.show_scoreboard(&self.scoreboard)?;
                return Ok(SessionEnd::RoundLimit);
            }

            if self.play_round(human_token)?.is_none() {
                return self.terminate();
            }
        }
    }

    /// Plays one round. `None` means the player asked to stop mid-round.
    #[instrument(skip(self), fields(round = self.round, opener = %self.opener))]
    fn play_round(&mut self, human_token: char) -> Result<Option<RoundResult>, ConsoleError> {
        self.console.show_round(self.round)?;
        if self.opener == Seat::Human {
            self.show_board(human_token)?;
        }

        let mut state = TurnState::awaiting(self.opener);
        loop {
            debug!(?state, "Turn");
            state = match state {
                TurnState::AwaitingHumanMove => match self.human_turn(human_token)? {
                    Some(next) => next,
                    None => return Ok(None),
                },
                TurnState::AwaitingComputerMove => self.computer_turn(human_token)?,
                TurnState::RoundOver(outcome) => return self.finish_round(outcome).map(Some),
            };
        }
    }

    /// Reads cells until an empty one is given, then places the human mark.
    fn human_turn(&mut self, human_token: char) -> Result<Option<TurnState>, ConsoleError> {
        loop {
            match self.console.prompt_move(*self.config.layout())? {
                MoveInput::Terminate => return Ok(None),
                MoveInput::Cell(mv) => match self.board.place(mv, Seat::Human.mark()) {
                    Ok(()) => {
                        debug!(%mv, "Human moved");
                        break;
                    }
                    Err(e) => debug!(error = %e, "Rejected move, prompting again"),
                },
            }
        }
        self.show_board(human_token)?;
        Ok(Some(self.after_move(Seat::Computer)))
    }

    /// Lets the engine pick and play its move.
    fn computer_turn(&mut self, human_token: char) -> Result<TurnState, ConsoleError> {
        let mark = Seat::Computer.mark();
        let Some(mv) = find_best_move(&mut self.board, mark) else {
            error!("Engine found no move on an in-progress board");
            return Ok(TurnState::RoundOver(evaluate(&self.board)));
        };
        self.board.set(mv, mark);
        debug!(%mv, "Computer moved");
        self.show_board(human_token)?;
        Ok(self.after_move(Seat::Human))
    }

    /// Evaluates the board after a move and picks the next state.
    fn after_move(&self, next: Seat) -> TurnState {
        match evaluate(&self.board) {
            GameOutcome::InProgress => TurnState::awaiting(next),
            outcome => TurnState::RoundOver(outcome),
        }
    }

    /// Reports the result, clears the board and hands the opening to the
    /// other seat.
    fn finish_round(&mut self, outcome: GameOutcome) -> Result<RoundResult, ConsoleError> {
        debug_assert!(outcome.is_terminal(), "round finished while still in progress");
        let result = match RoundResult::from_outcome(outcome) {
            Some(result) => result,
            None => {
                error!(?outcome, "Round finished without a terminal outcome, recording a tie");
                RoundResult::Tie
            }
        };
        info!(round = self.round, %result, "Round over");
        self.console.show_result(result)?;
        self.scoreboard.record(result);
        reset(&mut self.board);
        self.opener = self.opener.toggle();
        self.round += 1;
        Ok(result)
    }

    fn show_board(&mut self, human_token: char) -> Result<(), ConsoleError> {
        self.console
            .show_board(&self.board, *self.config.computer_token(), human_token)
    }

    fn terminate(&mut self) -> Result<SessionEnd, ConsoleError> {
        info!("Session terminated by player");
        self.console.show_terminated()?;
        if self.scoreboard.rounds() > 0 {
            self.console.show_scoreboard(&self.scoreboard)?;
        }
        Ok(SessionEnd::Terminated)
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Results so far.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Seat that opens the next round.
    pub fn opener(&self) -> Seat {
        self.opener
    }

    /// Consumes the controller, returning its console.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }
}
