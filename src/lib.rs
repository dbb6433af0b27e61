//! # war-cards
//!
//! Card logic for the "War" card comparison game.
//!
//! ## Design Principles
//!
//! 1. **Pure Core**: Deck creation and round resolution are pure functions.
//!    Nothing in `cards` or `rules` touches storage.
//!
//! 2. **Valid By Construction**: A `Deck` always holds the 52 distinct cards;
//!    a `Card` cannot carry an unknown rank or suit. Text input is checked once,
//!    at parse time.
//!
//! 3. **Deterministic Games**: A seed fully determines a game.
//!
//! ## Modules
//!
//! - `core`: Errors, sides, RNG, configuration
//! - `cards`: Suits, ranks, cards, decks
//! - `rules`: Round resolution and game results
//! - `store`: Session-scoped deck storage with all-or-nothing writes
//! - `games`: The War game session

pub mod core;
pub mod cards;
pub mod rules;
pub mod store;
pub mod games;

// Re-export commonly used types
pub use crate::core::{GameRng, Result, Side, SideMap, WarConfig, WarError};

pub use crate::cards::{create_deck, get_ranking, Card, Deck, Rank, Suit, DECK_SIZE};

pub use crate::rules::{resolve_round, GameResult, RoundOutcome};

pub use crate::store::{DeckStore, DeckTransaction, SessionId};

pub use crate::games::war::{GameSummary, RoundRecord, WarGame, WarGameBuilder};
