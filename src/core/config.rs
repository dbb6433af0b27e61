//! Game configuration.
//!
//! `WarConfig` is read from a TOML file and checked with [`WarConfig::verify`]
//! before a game is built from it. Every field has a default, so an empty file
//! is a valid configuration.
//!
//! ```toml
//! seed = 42
//! shuffle = true
//! max_rounds = 10
//! log_filter = "debug"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{Result, WarError};
use crate::cards::DECK_SIZE;

/// Most rounds a single deck can supply (one card per side per round).
pub const MAX_ROUNDS: usize = DECK_SIZE / 2;

/// Configuration for one War game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WarConfig {
    /// Shuffle seed. `None` picks a random seed when the game starts.
    pub seed: Option<u64>,

    /// Shuffle the deck before dealing. Unshuffled games deal in deck order.
    pub shuffle: bool,

    /// Stop after this many rounds. `None` plays the whole deck.
    pub max_rounds: Option<usize>,

    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for WarConfig {
    fn default() -> Self {
        Self {
            seed: None,
            shuffle: true,
            max_rounds: None,
            log_filter: "info".to_string(),
        }
    }
}

impl WarConfig {
    /// Parse and verify a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.verify()?;
        Ok(config)
    }

    /// Read, parse and verify a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Check value ranges.
    pub fn verify(&self) -> Result<()> {
        if let Some(rounds) = self.max_rounds {
            if rounds == 0 || rounds > MAX_ROUNDS {
                return Err(WarError::invalid_config(format!(
                    "max_rounds must be between 1 and {MAX_ROUNDS}, got {rounds}"
                )));
            }
        }
        if self.log_filter.trim().is_empty() {
            return Err(WarError::invalid_config("log_filter must not be empty"));
        }
        Ok(())
    }

    /// Number of rounds a game with this configuration plays.
    #[must_use]
    pub fn round_limit(&self) -> usize {
        self.max_rounds.unwrap_or(MAX_ROUNDS).min(MAX_ROUNDS)
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_max_rounds(mut self, rounds: usize) -> Self {
        self.max_rounds = Some(rounds);
        self
    }

    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }
}
