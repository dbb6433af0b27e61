//! "War" against the computer.
//!
//! - One 52-card deck, shuffled from a seed
//! - Each round the user and then the computer are dealt the next card
//! - Higher ranking takes the round; equal rankings are a draw
//! - The game ends when the deck (or the configured round limit) runs out,
//!   and whoever took more rounds wins
//!
//! Ties are not escalated: there is no "war" pile.

mod game;

pub use game::{GameSummary, RoundRecord, WarGame, WarGameBuilder};
