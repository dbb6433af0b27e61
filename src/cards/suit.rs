//! Card suits.
//!
//! Suits never take part in comparisons; they only make the 52 cards of a deck
//! distinct.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::WarError;

/// One of the four suits.
///
/// Declaration order is the deck order: spades come first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Spade,
    Heart,
    Diamond,
    Club,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];

    /// Lower-case name, as stored and displayed.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Spade => "spade",
            Suit::Heart => "heart",
            Suit::Diamond => "diamond",
            Suit::Club => "club",
        }
    }

    /// Name with a leading capital (`Spade`).
    #[must_use]
    pub const fn capitalized(self) -> &'static str {
        match self {
            Suit::Spade => "Spade",
            Suit::Heart => "Heart",
            Suit::Diamond => "Diamond",
            Suit::Club => "Club",
        }
    }

    /// One-character symbol for compact output.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spade => '♠',
            Suit::Heart => '♥',
            Suit::Diamond => '♦',
            Suit::Club => '♣',
        }
    }
}

impl FromStr for Suit {
    type Err = WarError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let lowered = value.trim().to_ascii_lowercase();
        Suit::ALL
            .into_iter()
            .find(|suit| suit.name() == lowered)
            .ok_or_else(|| WarError::InvalidSuit {
                suit: value.to_string(),
            })
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("spade".parse::<Suit>().unwrap(), Suit::Spade);
        assert_eq!("Heart".parse::<Suit>().unwrap(), Suit::Heart);
        assert_eq!(" CLUB ".parse::<Suit>().unwrap(), Suit::Club);
        assert_eq!("diamond".parse::<Suit>().unwrap(), Suit::Diamond);
    }

    #[test]
    fn test_parse_invalid() {
        let err = "star".parse::<Suit>().unwrap_err();
        assert!(matches!(err, WarError::InvalidSuit { ref suit } if suit == "star"));
        assert!("".parse::<Suit>().is_err());
        assert!("s".parse::<Suit>().is_err());
    }

    #[test]
    fn test_parse_rejects_plurals() {
        for bad in ["spades", "Hearts", "diamonds", "clubs"] {
            let err = bad.parse::<Suit>().unwrap_err();
            assert!(
                matches!(err, WarError::InvalidSuit { ref suit } if suit == bad),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(Suit::Diamond.to_string(), "diamond");
        assert_eq!(Suit::Club.capitalized(), "Club");
        assert_eq!(Suit::Heart.symbol(), '♥');
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Suit::Spade).unwrap(), "\"spade\"");
        let suit: Suit = serde_json::from_str("\"club\"").unwrap();
        assert_eq!(suit, Suit::Club);
    }
}
