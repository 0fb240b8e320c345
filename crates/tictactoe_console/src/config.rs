//! Game configuration loaded from TOML.

use crate::layout::Layout;
use crate::seat::Seat;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a play session.
///
/// Every field is optional in the file; missing ones take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Token shown for the human's marks. Prompted for when absent.
    #[setters(strip_option)]
    symbol: Option<char>,

    /// Token shown for the computer's marks.
    computer_token: char,

    /// Digit-to-cell scheme for move input.
    layout: Layout,

    /// Who opens the first round. Alternates afterwards.
    first_player: Seat,

    /// Stop after this many completed rounds. Unlimited when absent.
    #[setters(strip_option)]
    max_rounds: Option<u32>,

    /// Style result messages with terminal colors.
    color: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            symbol: None,
            computer_token: default_computer_token(),
            layout: Layout::default(),
            first_player: Seat::default(),
            max_rounds: None,
            color: true,
        }
    }
}

#[instrument]
fn default_computer_token() -> char {
    '*'
}

impl GameConfig {
    /// Creates a configuration with defaults.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(layout = %config.layout, first_player = %config.first_player, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks settings that cannot be expressed in the types.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.symbol == Some(self.computer_token) {
            return Err(ConfigError::new(format!(
                "Player symbol '{}' collides with the computer token",
                self.computer_token
            )));
        }
        if self.computer_token == '0' || self.symbol == Some('0') {
            return Err(ConfigError::new(
                "'0' is reserved for empty cells".to_string(),
            ));
        }
        if self.max_rounds == Some(0) {
            return Err(ConfigError::new(
                "max_rounds must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
