//! A single playing card.

use serde::{Deserialize, Serialize};

use super::rank::Rank;
use super::suit::Suit;
use crate::core::Result;

/// An immutable (suit, rank) pair.
///
/// ```
/// use war_cards::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Suit::Club, Rank::Jack);
/// assert_eq!(card.ranking(), 11);
/// assert_eq!(card.to_string(), "Suit: club, Rank: jack");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Build a card from its textual suit and rank.
    pub fn parse(suit: &str, rank: &str) -> Result<Self> {
        Ok(Self::new(suit.parse()?, rank.parse()?))
    }

    /// Comparative strength of this card, in `2..=14`. Suit plays no part.
    #[must_use]
    pub const fn ranking(&self) -> u8 {
        self.rank.ranking()
    }

    /// Position of this card in a freshly created deck (`0..52`).
    #[must_use]
    pub fn deck_index(&self) -> usize {
        let suit = Suit::ALL
            .iter()
            .position(|s| *s == self.suit)
            .unwrap_or_default();
        suit * Rank::ALL.len() + (self.ranking() - Rank::Two.ranking()) as usize
    }

    /// Compact label such as `Q♥`.
    #[must_use]
    pub fn short(&self) -> String {
        format!("{}{}", self.rank.short(), self.suit.symbol())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Suit: {}, Rank: {}", self.suit, self.rank)
    }
}
