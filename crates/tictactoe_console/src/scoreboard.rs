//! Per-session tally of round results.

use crate::seat::Seat;
use derive_getters::Getters;
use tictactoe_engine::GameOutcome;
use tracing::instrument;

/// How a finished round went, from the human's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum RoundResult {
    /// The human completed a line.
    #[strum(to_string = "win")]
    Win,
    /// The computer completed a line.
    #[strum(to_string = "lose")]
    Lose,
    /// The board filled up without a line.
    #[strum(to_string = "tie")]
    Tie,
}

impl RoundResult {
    /// Interprets a terminal outcome. `None` while the round is in progress.
    #[instrument]
    pub fn from_outcome(outcome: GameOutcome) -> Option<Self> {
        match outcome {
            GameOutcome::Draw => Some(RoundResult::Tie),
            GameOutcome::InProgress => None,
            _ if outcome.winner() == Some(Seat::Human.mark()) => Some(RoundResult::Win),
            _ => Some(RoundResult::Lose),
        }
    }

    /// Banner printed when the round ends.
    pub fn message(self) -> &'static str {
        match self {
            RoundResult::Win => "-_-_- You win -_-_-",
            RoundResult::Lose => "-_-_- You lose -_-_-",
            RoundResult::Tie => "-_-_- Tie -_-_-",
        }
    }
}

/// Wins, losses and ties over the session. Kept in memory only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct Scoreboard {
    /// Rounds the human won.
    wins: u32,
    /// Rounds the computer won.
    losses: u32,
    /// Drawn rounds.
    ties: u32,
}

impl Scoreboard {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one finished round.
    #[instrument(skip(self))]
    pub fn record(&mut self, result: RoundResult) {
        match result {
            RoundResult::Win => self.wins += 1,
            RoundResult::Lose => self.losses += 1,
            RoundResult::Tie => self.ties += 1,
        }
    }

    /// Number of completed rounds.
    pub fn rounds(&self) -> u32 {
        self.wins + self.losses + self.ties
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rounds: {}  Wins: {}  Losses: {}  Ties: {}",
            self.rounds(),
            self.wins,
            self.losses,
            self.ties
        )
    }
}
