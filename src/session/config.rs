//! Configuration options for a play session.
//!
//! Settings can come from defaults, a JSON file, or builder calls, and are
//! validated before a session starts.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::cards::Deck;

/// Default number of decks cards are drawn from.
pub const DEFAULT_NUM_DECKS: usize = 2;

/// Default size of a freshly dealt hand.
pub const DEFAULT_HAND_SIZE: usize = 11;

/// Configuration for a session.
///
/// # Example
/// ```
/// use rummy_solver::session::SessionConfig;
///
/// let config = SessionConfig::default().with_books(2).with_runs(1);
/// assert_eq!(config.num_decks, 2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Number of 54-card decks random hands are drawn from.
    ///
    /// Also the value `decks` falls back to when given no argument.
    pub num_decks: usize,

    /// Number of cards dealt by `new` when given no argument.
    pub hand_size: usize,

    /// Books requested at start-up.
    pub num_books: usize,

    /// Runs requested at start-up.
    pub num_runs: usize,

    /// Random seed for reproducible deals.
    ///
    /// If `None`, hands are drawn from an entropy-seeded generator.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            num_decks: DEFAULT_NUM_DECKS,
            hand_size: DEFAULT_HAND_SIZE,
            num_books: 0,
            num_runs: 0,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Create a new SessionConfig with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::from_json_str(&content)
    }

    /// Parse a configuration from a JSON string. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Builder method: set number of decks.
    pub fn with_decks(mut self, num_decks: usize) -> Self {
        self.num_decks = num_decks;
        self
    }

    /// Builder method: set default hand size.
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Builder method: set requested books.
    pub fn with_books(mut self, num_books: usize) -> Self {
        self.num_books = num_books;
        self
    }

    /// Builder method: set requested runs.
    pub fn with_runs(mut self, num_runs: usize) -> Self {
        self.num_runs = num_runs;
        self
    }

    /// Builder method: set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_decks == 0 {
            return Err(ConfigError::InvalidDecks(self.num_decks));
        }
        if self.num_decks > Deck::MAX_DECKS {
            return Err(ConfigError::TooManyDecks(self.num_decks));
        }
        if self.hand_size == 0 {
            return Err(ConfigError::InvalidHandSize(self.hand_size));
        }
        Ok(())
    }
}

/// Errors that can occur when loading or validating a session configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Deck count must be positive.
    InvalidDecks(usize),
    /// Deck count is above `Deck::MAX_DECKS`.
    TooManyDecks(usize),
    /// Hand size must be positive.
    InvalidHandSize(usize),
    /// Configuration file could not be read.
    IoError(String),
    /// Configuration file is not valid JSON for this struct.
    ParseError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidDecks(val) => {
                write!(f, "Number of decks {} must be positive", val)
            }
            ConfigError::TooManyDecks(val) => {
                write!(f, "Number of decks {} exceeds the maximum of {}", val, Deck::MAX_DECKS)
            }
            ConfigError::InvalidHandSize(val) => {
                write!(f, "Hand size {} must be positive", val)
            }
            ConfigError::IoError(msg) => write!(f, "Could not read config: {}", msg),
            ConfigError::ParseError(msg) => write!(f, "Could not parse config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
