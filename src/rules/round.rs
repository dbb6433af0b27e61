//! Single-round resolution.
//!
//! A round compares one user card against one computer card by ranking.
//! Suits never break ties: equal rankings are a draw.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Outcome of a round, from the user's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundOutcome {
    Win,
    Draw,
    Loss,
}

impl RoundOutcome {
    /// Numeric form: win 1, draw 0, loss -1.
    #[must_use]
    pub const fn score(self) -> i8 {
        match self {
            RoundOutcome::Win => 1,
            RoundOutcome::Draw => 0,
            RoundOutcome::Loss => -1,
        }
    }

    /// The same round seen from the other side.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            RoundOutcome::Win => RoundOutcome::Loss,
            RoundOutcome::Draw => RoundOutcome::Draw,
            RoundOutcome::Loss => RoundOutcome::Win,
        }
    }
}

impl From<Ordering> for RoundOutcome {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => RoundOutcome::Win,
            Ordering::Equal => RoundOutcome::Draw,
            Ordering::Less => RoundOutcome::Loss,
        }
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            RoundOutcome::Win => "win",
            RoundOutcome::Draw => "draw",
            RoundOutcome::Loss => "loss",
        })
    }
}

/// Resolve one round.
///
/// ```
/// use war_cards::cards::{Card, Rank, Suit};
/// use war_cards::rules::{resolve_round, RoundOutcome};
///
/// let king = Card::new(Suit::Club, Rank::King);
/// let jack = Card::new(Suit::Club, Rank::Jack);
/// assert_eq!(resolve_round(&king, &jack), RoundOutcome::Win);
/// ```
#[must_use]
pub fn resolve_round(user_card: &Card, computer_card: &Card) -> RoundOutcome {
    user_card.ranking().cmp(&computer_card.ranking()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    #[test]
    fn test_user_win() {
        let outcome = resolve_round(&card(Suit::Club, Rank::King), &card(Suit::Club, Rank::Jack));
        assert_eq!(outcome, RoundOutcome::Win);
        assert_eq!(outcome.score(), 1);
    }

    #[test]
    fn test_user_draw() {
        let outcome = resolve_round(&card(Suit::Club, Rank::King), &card(Suit::Heart, Rank::King));
        assert_eq!(outcome, RoundOutcome::Draw);
        assert_eq!(outcome.score(), 0);
    }

    #[test]
    fn test_user_loss() {
        let outcome = resolve_round(&card(Suit::Club, Rank::Jack), &card(Suit::Club, Rank::King));
        assert_eq!(outcome, RoundOutcome::Loss);
        assert_eq!(outcome.score(), -1);
    }

    #[test]
    fn test_ace_beats_two() {
        let outcome = resolve_round(&card(Suit::Spade, Rank::Two), &card(Suit::Diamond, Rank::Ace));
        assert_eq!(outcome, RoundOutcome::Loss);
    }

    #[test]
    fn test_reversed() {
        assert_eq!(RoundOutcome::Win.reversed(), RoundOutcome::Loss);
        assert_eq!(RoundOutcome::Loss.reversed(), RoundOutcome::Win);
        assert_eq!(RoundOutcome::Draw.reversed(), RoundOutcome::Draw);
    }

    #[test]
    fn test_display_and_serde() {
        assert_eq!(RoundOutcome::Draw.to_string(), "draw");
        assert_eq!(serde_json::to_string(&RoundOutcome::Win).unwrap(), "\"win\"");
    }
}
