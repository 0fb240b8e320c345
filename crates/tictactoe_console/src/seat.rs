//! Which participant a turn belongs to.

use serde::{Deserialize, Serialize};
use tictactoe_engine::Cell;
use tracing::instrument;

/// A side of the table: the person at the keyboard or the engine.
///
/// Defaults to [`Seat::Human`] so the player opens the first round.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Seat {
    /// The human player, marking cells as [`Cell::PlayerTwo`].
    #[default]
    Human,
    /// The minimax engine, marking cells as [`Cell::PlayerOne`].
    Computer,
}

impl Seat {
    /// Toggles between `Human` and `Computer`.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Human => Self::Computer,
            Self::Computer => Self::Human,
        }
    }

    /// Board mark used by this seat.
    pub fn mark(self) -> Cell {
        match self {
            Self::Human => Cell::PlayerTwo,
            Self::Computer => Cell::PlayerOne,
        }
    }
}
