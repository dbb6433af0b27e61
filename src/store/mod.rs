//! Session-scoped deck storage.
//!
//! Deck creation itself is pure (`cards::create_deck`). Anything that needs to
//! keep a deck around between requests keeps it here, one deck per session:
//!
//! - Creating a deck for a session that already has one is an error. Clear it
//!   first, so repeated creation can never pile up 104 cards.
//! - Writes go through [`DeckStore::transaction`]: they are staged on a copy
//!   and only become visible when the whole closure succeeds.
//! - The store can be written to and read back from a compact binary
//!   snapshot; decks are re-validated on the way in.

mod deck_store;

pub use deck_store::{DeckStore, DeckTransaction, SessionId};
