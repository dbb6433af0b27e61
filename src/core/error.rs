//! Error type shared by the whole crate.
//!
//! Every fallible operation returns [`Result<T>`]. Validation failures are
//! reported immediately to the caller; nothing in the core retries.

use thiserror::Error;

use crate::cards::Card;
use crate::store::SessionId;

/// Unified error type for card, deck, store and game operations.
#[derive(Error, Debug)]
pub enum WarError {
    #[error("Invalid rank: {rank:?}")]
    InvalidRank { rank: String },

    #[error("Invalid suit: {suit:?}")]
    InvalidSuit { suit: String },

    #[error("A deck must hold exactly 52 cards, got {len}")]
    IncompleteDeck { len: usize },

    #[error("Duplicate card in deck ({card})")]
    DuplicateCard { card: Card },

    #[error("{session} already holds a deck, clear it before creating a new one")]
    DeckAlreadyExists { session: SessionId },

    #[error("{session} has no deck")]
    UnknownSession { session: SessionId },

    #[error("Snapshot lists {session} more than once")]
    DuplicateSession { session: SessionId },

    #[error("No cards left to play a round")]
    DeckExhausted,

    #[error("Invalid configuration: {desc}")]
    InvalidConfig { desc: String },

    #[error("Configuration parse failed: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Snapshot encoding failed: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for crate operations.
pub type Result<T> = std::result::Result<T, WarError>;

impl WarError {
    /// Build an [`WarError::InvalidConfig`] from any message.
    pub fn invalid_config(desc: impl Into<String>) -> Self {
        Self::InvalidConfig { desc: desc.into() }
    }

    /// True for errors caused by malformed card names.
    #[must_use]
    pub fn is_card_parse_error(&self) -> bool {
        matches!(self, Self::InvalidRank { .. } | Self::InvalidSuit { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = WarError::InvalidRank {
            rank: "joker".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid rank: \"joker\"");

        let err = WarError::IncompleteDeck { len: 104 };
        assert_eq!(err.to_string(), "A deck must hold exactly 52 cards, got 104");

        let err = WarError::DeckAlreadyExists {
            session: SessionId::new(3),
        };
        assert!(err.to_string().starts_with("Session(3) already holds a deck"));

        let err = WarError::DuplicateSession {
            session: SessionId::new(4),
        };
        assert_eq!(err.to_string(), "Snapshot lists Session(4) more than once");
    }

    #[test]
    fn test_card_parse_error_classification() {
        assert!(WarError::InvalidSuit { suit: "star".into() }.is_card_parse_error());
        assert!(!WarError::DeckExhausted.is_card_parse_error());
    }

    #[test]
    fn test_io_conversion() {
        fn read() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/here.toml")?)
        }
        assert!(matches!(read(), Err(WarError::Io(_))));
    }
}
