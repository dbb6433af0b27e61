//! The 52-card deck.
//!
//! A `Deck` always holds exactly one of each (suit, rank) pair. The only ways
//! to get one are [`create_deck`] and [`Deck::from_cards`], which validates;
//! deserialisation goes through the same check.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;
use crate::core::{GameRng, Result, WarError};

/// Number of cards in a complete deck.
pub const DECK_SIZE: usize = Suit::ALL.len() * Rank::ALL.len();

/// A complete, duplicate-free set of 52 cards in some order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Deck {
    cards: Vec<Card>,
}

/// Produce one of each of the 52 cards.
///
/// Pure: nothing is stored, so calling it twice gives two independent decks.
/// Cards come out suit by suit (spade, heart, diamond, club), two to ace
/// within each suit.
///
/// ```
/// use war_cards::cards::create_deck;
///
/// let deck = create_deck();
/// assert_eq!(deck.len(), 52);
/// assert_eq!(deck.cards()[0].to_string(), "Suit: spade, Rank: two");
/// ```
#[must_use]
pub fn create_deck() -> Deck {
    let cards: Vec<Card> = Suit::ALL
        .into_iter()
        .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card::new(suit, rank)))
        .collect();
    debug!(cards = cards.len(), "created deck");
    Deck { cards }
}

impl Deck {
    /// Validate an arbitrary card list as a deck.
    ///
    /// Fails with [`WarError::IncompleteDeck`] unless there are exactly 52
    /// cards, and with [`WarError::DuplicateCard`] on the first repeat.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self> {
        if cards.len() != DECK_SIZE {
            return Err(WarError::IncompleteDeck { len: cards.len() });
        }

        let mut seen = FxHashSet::default();
        seen.reserve(DECK_SIZE);
        for card in &cards {
            if !seen.insert(*card) {
                return Err(WarError::DuplicateCard { card: *card });
            }
        }

        Ok(Self { cards })
    }

    /// The same cards in a seeded random order.
    #[must_use]
    pub fn shuffled(mut self, rng: &mut GameRng) -> Self {
        rng.shuffle(&mut self.cards);
        debug!(stream_seed = rng.seed(), "shuffled deck");
        self
    }

    /// Cards in deck order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false; kept for the `len`/`is_empty` pairing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Give up the deck guarantee and take the cards.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        create_deck()
    }
}

impl TryFrom<Vec<Card>> for Deck {
    type Error = WarError;

    fn try_from(cards: Vec<Card>) -> Result<Self> {
        Self::from_cards(cards)
    }
}

impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.cards
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
