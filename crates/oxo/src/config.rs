//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use oxo_engine::{DEFAULT_SIZE, MAX_SIZE, MIN_SIZE, Player, Strategy};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Config file read when no path is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "oxo.toml";

/// Settings for an interactive session.
///
/// Optional answers skip the matching prompt in the console.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Board edge length, clamped to 3..=5.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Seed for the session RNG.
    #[serde(default)]
    seed: Option<u64>,

    /// Identity the human plays.
    #[serde(default)]
    symbol: Option<Player>,

    /// CPU strategy.
    #[serde(default)]
    strategy: Option<Strategy>,
}

#[instrument]
fn default_board_size() -> usize {
    DEFAULT_SIZE
}

fn clamp_size(size: usize) -> usize {
    let clamped = size.clamp(MIN_SIZE, MAX_SIZE);
    if clamped != size {
        warn!(requested = size, clamped, "Board size out of range");
    }
    clamped
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            seed: None,
            symbol: None,
            strategy: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let mut config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.board_size = clamp_size(config.board_size);

        info!(board_size = config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path`, or [`DEFAULT_CONFIG_PATH`] when no path is given.
    ///
    /// A missing default file yields the default config; a missing file
    /// that was asked for explicitly is an error.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Replaces file values with any flags given on the command line.
    #[instrument(skip(self))]
    pub fn override_with(
        mut self,
        board_size: Option<usize>,
        seed: Option<u64>,
        symbol: Option<Player>,
        strategy: Option<Strategy>,
    ) -> Self {
        if let Some(size) = board_size {
            self.board_size = clamp_size(size);
        }
        self.seed = seed.or(self.seed);
        self.symbol = symbol.or(self.symbol);
        self.strategy = strategy.or(self.strategy);
        self
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
