//! Card model: suits, ranks, cards and the 52-card deck.
//!
//! ## Key Types
//!
//! - `Suit`: spade, heart, diamond, club (never compared)
//! - `Rank`: two through ace, with a ranking of 2 through 14
//! - `Card`: an immutable (suit, rank) pair
//! - `Deck`: exactly one of each card, validated on construction

pub mod suit;
pub mod rank;
pub mod card;
pub mod deck;

pub use suit::Suit;
pub use rank::{get_ranking, Rank};
pub use card::Card;
pub use deck::{create_deck, Deck, DECK_SIZE};
