//! Card ranks and their comparative strength.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{Result, WarError};

/// One of the thirteen face values.
///
/// The discriminant is the ranking: two is 2, ace is 14.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All ranks, weakest first.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Comparative strength in `2..=14`.
    #[must_use]
    pub const fn ranking(self) -> u8 {
        self as u8
    }

    /// Rank with the given strength, if any.
    #[must_use]
    pub fn from_ranking(ranking: u8) -> Option<Self> {
        Rank::ALL.into_iter().find(|rank| rank.ranking() == ranking)
    }

    /// Lower-case name, as stored and displayed.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Rank::Two => "two",
            Rank::Three => "three",
            Rank::Four => "four",
            Rank::Five => "five",
            Rank::Six => "six",
            Rank::Seven => "seven",
            Rank::Eight => "eight",
            Rank::Nine => "nine",
            Rank::Ten => "ten",
            Rank::Jack => "jack",
            Rank::Queen => "queen",
            Rank::King => "king",
            Rank::Ace => "ace",
        }
    }

    /// Upper-cased name (`SIX`).
    #[must_use]
    pub fn uppercased(self) -> String {
        self.name().to_ascii_uppercase()
    }

    /// Short label for compact output (`2`..`10`, `J`, `Q`, `K`, `A`).
    #[must_use]
    pub fn short(self) -> String {
        match self {
            Rank::Jack => "J".to_string(),
            Rank::Queen => "Q".to_string(),
            Rank::King => "K".to_string(),
            Rank::Ace => "A".to_string(),
            _ => self.ranking().to_string(),
        }
    }
}

impl FromStr for Rank {
    type Err = WarError;

    /// Accepts the names (`jack`, any case) and the numerals `2`..`10`.
    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        let lowered = value.trim().to_ascii_lowercase();
        let by_name = Rank::ALL.into_iter().find(|rank| rank.name() == lowered);
        let by_number = || {
            Rank::ALL
                .into_iter()
                .filter(|rank| rank.ranking() <= 10)
                .find(|rank| rank.ranking().to_string() == lowered)
        };
        by_name.or_else(by_number).ok_or_else(|| WarError::InvalidRank {
            rank: value.to_string(),
        })
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Ranking of a rank given by name.
///
/// Fails with [`WarError::InvalidRank`] for anything but the 13 recognised
/// values.
///
/// ```
/// use war_cards::cards::get_ranking;
///
/// assert_eq!(get_ranking("jack").unwrap(), 11);
/// assert!(get_ranking("joker").is_err());
/// ```
pub fn get_ranking(rank: &str) -> Result<u8> {
    Ok(rank.parse::<Rank>()?.ranking())
}
